//! Report structures and console rendering.
//!
//! The simulator returns a `Report`; everything here is presentation.
//! The text layout follows the desk's original payout report: a direct
//! commission table, a TOTAL line, and a pool summary block. Rendering
//! never feeds back into the computation.

use crate::{
    money::fmt_usd,
    simulator::{DIRECT_COMMISSION_CENTS, ORDER_VALUE_CENTS, POOL_CONTRIBUTION_CENTS},
    types::{Cents, UserId},
};
use serde::Serialize;
use std::fmt::Write as _;

/// Sentinel shown for a referrer whose profile, or a field of it, is
/// missing. A lookup miss is display-only and never an error.
pub const MISSING_FIELD: &str = "N/A";

const RULE_WIDTH: usize = 100;

/// One row of the direct-commission table, keyed by referrer.
///
/// Only referrers with at least one downline order appear; a referrer
/// with an empty downline is never materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectCommissionRecord {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub orders_from_downline: u64,
    pub total_direct_commission: Cents,
}

/// Aggregate pool block: one simulated order per qualifying edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolSummary {
    pub simulated_orders: u64,
    pub pool_contribution: Cents,
}

/// Full simulation output. Recomputed fresh on every run, held only in
/// memory, discarded after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub direct_commissions: Vec<DirectCommissionRecord>,
    pub pool: PoolSummary,
    pub total_direct_commission_paid: Cents,
}

impl Report {
    /// Render the fixed-width console report. All currency is
    /// two-decimal dollars.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(RULE_WIDTH);
        let line = "-".repeat(RULE_WIDTH);

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "DIRECT REFERRAL BONUS SIMULATION - one {} order per referred user",
            fmt_usd(ORDER_VALUE_CENTS)
        );
        let _ = writeln!(out, "{rule}");

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "DIRECT REFERRAL COMMISSIONS (10% of {} = {} per order):",
            fmt_usd(ORDER_VALUE_CENTS),
            fmt_usd(DIRECT_COMMISSION_CENTS)
        );
        let _ = writeln!(out, "{line}");

        if self.direct_commissions.is_empty() {
            let _ = writeln!(
                out,
                "No direct commissions (no referral relationships found)"
            );
        } else {
            let _ = writeln!(
                out,
                "{:<30} {:<35} {:>20} {:>13}",
                "Name", "Email", "Orders from Downline", "Commission"
            );
            let _ = writeln!(out, "{line}");
            for rec in &self.direct_commissions {
                let _ = writeln!(
                    out,
                    "{:<30} {:<35} {:>20} {:>13}",
                    clip(&rec.full_name, 29),
                    clip(&rec.email, 34),
                    rec.orders_from_downline,
                    fmt_usd(rec.total_direct_commission)
                );
            }
            let _ = writeln!(out, "{line}");
            let _ = writeln!(
                out,
                "{:<86} {:>13}",
                "TOTAL DIRECT COMMISSIONS PAID",
                fmt_usd(self.total_direct_commission_paid)
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "WEEKLY POOL SUMMARY (25% of {} = {} per order):",
            fmt_usd(ORDER_VALUE_CENTS),
            fmt_usd(POOL_CONTRIBUTION_CENTS)
        );
        let _ = writeln!(out, "{line}");
        let _ = writeln!(
            out,
            "Total simulated orders:  {}",
            self.pool.simulated_orders
        );
        let _ = writeln!(
            out,
            "Order value (each):      {}",
            fmt_usd(ORDER_VALUE_CENTS)
        );
        let _ = writeln!(
            out,
            "Pool contribution (ea):  {}",
            fmt_usd(POOL_CONTRIBUTION_CENTS)
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<50} {:>13}",
            "TOTAL POOL VALUE:",
            fmt_usd(self.pool.pool_contribution)
        );

        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "SIMULATION COMPLETE");
        let _ = writeln!(out, "{rule}");

        out
    }
}

/// Truncate to at most `max` characters so long names cannot break the
/// column layout.
fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
