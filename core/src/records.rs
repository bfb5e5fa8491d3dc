//! Typed input records.
//!
//! RULE: the simulator only ever sees these records. Both fetch
//! collaborators (store, snapshot) validate raw rows into them at the
//! boundary; untyped key-value row access stops there.

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// A user who may place a simulated order and may act as a referrer.
///
/// `full_name` and `email` are nullable upstream; they are display-only
/// enrichment and a missing value never affects the computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub full_name: Option<String>,
    pub email: Option<String>,
}

/// A directed referral relationship: `referred_user_id` was brought in
/// by `referrer_id`. Each user has at most one incoming edge.
///
/// `referrer_id` may be absent: the referred user's simulated order
/// then earns no one a commission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralEdge {
    pub referred_user_id: UserId,
    pub referrer_id: Option<UserId>,
}
