//! Deterministic synthetic referral-network generation.
//!
//! The payout report was originally run against live production tables.
//! This module builds a stand-in network offline: same seed, same
//! snapshot, byte for byte. The share parameters deliberately cover the
//! simulator's edge cases (orphan buyers, null referrers, referrers
//! with no profile row, profiles with no name).

use crate::{
    name_generator::NameGenerator,
    records::{Profile, ReferralEdge},
    rng::FixtureRng,
    snapshot::NetworkSnapshot,
};

#[derive(Debug, Clone)]
pub struct FixtureParams {
    pub seed: u64,
    /// Number of profiles to generate.
    pub population: usize,
    /// Probability that a profile (other than the first) was referred
    /// by an earlier one.
    pub referred_share: f64,
    /// Of the referred users, the share whose edge carries no referrer.
    pub no_referrer_share: f64,
    /// Of the referred users, the share whose referrer id points at no
    /// profile row (exercises the sentinel path).
    pub ghost_referrer_share: f64,
    /// Share of profiles with a null full_name.
    pub missing_name_share: f64,
}

impl Default for FixtureParams {
    fn default() -> Self {
        Self {
            seed: 42,
            population: 200,
            referred_share: 0.65,
            no_referrer_share: 0.05,
            ghost_referrer_share: 0.03,
            missing_name_share: 0.04,
        }
    }
}

/// Build a synthetic network snapshot.
///
/// Referrers always predate the users they refer, so the network is
/// acyclic by construction, and each user receives at most one
/// incoming edge (mirrors the upstream one-to-one constraint).
pub fn generate(params: &FixtureParams) -> NetworkSnapshot {
    let mut rng = FixtureRng::new(params.seed);

    let mut profiles = Vec::with_capacity(params.population);
    for ordinal in 0..params.population {
        let id = deterministic_uuid(&mut rng);
        let full_name = if rng.chance(params.missing_name_share) {
            None
        } else {
            Some(NameGenerator::generate_full_name(&mut rng))
        };
        let email = full_name
            .as_deref()
            .map(|name| NameGenerator::derive_email(name, ordinal));
        profiles.push(Profile {
            id,
            full_name,
            email,
        });
    }

    let mut referrals = Vec::new();
    for i in 1..profiles.len() {
        if !rng.chance(params.referred_share) {
            continue; // organic signup, no referral row at all
        }
        let referrer_id = if rng.chance(params.no_referrer_share) {
            None
        } else if rng.chance(params.ghost_referrer_share) {
            // A referrer whose profile row was deleted upstream.
            Some(deterministic_uuid(&mut rng))
        } else {
            let pick = rng.next_u64_below(i as u64) as usize;
            Some(profiles[pick].id.clone())
        };
        referrals.push(ReferralEdge {
            referred_user_id: profiles[i].id.clone(),
            referrer_id,
        });
    }

    log::info!(
        "generated fixture: seed={} profiles={} referral_edges={}",
        params.seed,
        profiles.len(),
        referrals.len()
    );

    NetworkSnapshot {
        profiles,
        referrals,
    }
}

/// A v4-format UUID built from RNG bytes instead of platform entropy,
/// so fixture runs stay reproducible.
fn deterministic_uuid(rng: &mut FixtureRng) -> String {
    uuid::Builder::from_random_bytes(rng.next_bytes_16())
        .into_uuid()
        .to_string()
}
