//! payout-core: offline estimation of a direct-referral payout scheme.
//!
//! Given the `profiles` and `referrals` relations, the simulator assumes
//! every referred user places one $190 order and computes the direct
//! commission owed to each referrer plus the aggregate pool contribution.
//! Data arrives through one of two fetch collaborators (SQLite store or
//! JSON snapshot); the computation itself is pure and in-memory.

pub mod error;
pub mod fixture;
pub mod money;
pub mod name_generator;
pub mod records;
pub mod report;
pub mod rng;
pub mod simulator;
pub mod snapshot;
pub mod store;
pub mod types;
