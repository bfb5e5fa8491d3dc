//! JSON snapshot source: both input relations materialized to a file.
//!
//! This is the file-based equivalent of pulling the raw `profiles` and
//! `referrals` tables through a remote data API and dumping them before
//! analysis. The simulator runs over the loaded snapshot exactly as it
//! does over a store fetch.

use crate::{
    error::{SimError, SimResult},
    records::{Profile, ReferralEdge},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub profiles: Vec<Profile>,
    pub referrals: Vec<ReferralEdge>,
}

impl NetworkSnapshot {
    pub fn load(path: &Path) -> SimResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SimError::SnapshotRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let snapshot: NetworkSnapshot = serde_json::from_str(&content)?;
        log::debug!(
            "loaded snapshot {}: {} profiles, {} referral edges",
            path.display(),
            snapshot.profiles.len(),
            snapshot.referrals.len()
        );
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> SimResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| SimError::SnapshotWrite {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }
}
