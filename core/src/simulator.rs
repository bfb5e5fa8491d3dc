//! The commission simulator: the computational core of the crate.
//!
//! One simulated $190 order per qualifying referral edge (an edge whose
//! referrer is present). A fixed $19.00 direct commission is paid to the
//! buyer's referrer, and a fixed $47.50 accrues to the shared weekly
//! pool, per order.
//!
//! RULE: `simulate` is a pure function over its two inputs. No I/O, no
//! randomness, no time dependence, no error path.

use crate::{
    records::{Profile, ReferralEdge},
    report::{DirectCommissionRecord, PoolSummary, Report, MISSING_FIELD},
    types::{Cents, UserId},
};
use std::collections::HashMap;

/// Value of every simulated order, in cents.
pub const ORDER_VALUE_CENTS: Cents = 190_00;

/// Paid to the buyer's direct referrer per order. Fixed at 10% of the
/// order value by policy; never recomputed from a rate at runtime.
pub const DIRECT_COMMISSION_CENTS: Cents = 19_00;

/// Accrued to the shared pool per order. Fixed at 25% of the order
/// value by policy.
pub const POOL_CONTRIBUTION_CENTS: Cents = 47_50;

/// Run the payout simulation over materialized snapshots of the two
/// input relations.
///
/// `profiles` is used for name/email enrichment only; a referrer absent
/// from it gets sentinel display fields and the computation proceeds.
pub fn simulate(profiles: &[Profile], referrals: &[ReferralEdge]) -> Report {
    let by_id: HashMap<&str, &Profile> =
        profiles.iter().map(|p| (p.id.as_str(), p)).collect();

    // Group qualifying edges by referrer, preserving the order in which
    // each referrer first appears. That order is the tie-break for the
    // final sort, so it must be stable for a given input ordering.
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&UserId, u64)> = Vec::new();
    let mut simulated_orders: u64 = 0;

    for edge in referrals {
        let Some(referrer_id) = &edge.referrer_id else {
            continue; // no referrer: the order earns no one a commission
        };
        simulated_orders += 1;
        match group_index.get(referrer_id.as_str()).copied() {
            Some(i) => groups[i].1 += 1,
            None => {
                group_index.insert(referrer_id.as_str(), groups.len());
                groups.push((referrer_id, 1));
            }
        }
    }

    let mut direct_commissions: Vec<DirectCommissionRecord> = groups
        .into_iter()
        .map(|(referrer_id, orders)| {
            let profile = by_id.get(referrer_id.as_str());
            let full_name = profile
                .and_then(|p| p.full_name.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string());
            let email = profile
                .and_then(|p| p.email.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string());
            DirectCommissionRecord {
                user_id: referrer_id.clone(),
                full_name,
                email,
                orders_from_downline: orders,
                total_direct_commission: orders as Cents * DIRECT_COMMISSION_CENTS,
            }
        })
        .collect();

    // Vec::sort_by is stable: equal totals keep first-appearance order.
    direct_commissions
        .sort_by(|a, b| b.total_direct_commission.cmp(&a.total_direct_commission));

    let total_direct_commission_paid = direct_commissions
        .iter()
        .map(|c| c.total_direct_commission)
        .sum();

    Report {
        direct_commissions,
        pool: PoolSummary {
            simulated_orders,
            pool_contribution: simulated_orders as Cents * POOL_CONTRIBUTION_CENTS,
        },
        total_direct_commission_paid,
    }
}
