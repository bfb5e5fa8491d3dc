//! Commission simulator tests.
//!
//! The simulator is a pure function, so every test here is plain
//! in-memory data in, report out.

use payout_core::{
    records::{Profile, ReferralEdge},
    report::MISSING_FIELD,
    simulator::{simulate, DIRECT_COMMISSION_CENTS, POOL_CONTRIBUTION_CENTS},
};

fn profile(id: &str, name: Option<&str>, email: Option<&str>) -> Profile {
    Profile {
        id: id.into(),
        full_name: name.map(Into::into),
        email: email.map(Into::into),
    }
}

fn edge(referred: &str, referrer: Option<&str>) -> ReferralEdge {
    ReferralEdge {
        referred_user_id: referred.into(),
        referrer_id: referrer.map(Into::into),
    }
}

#[test]
fn two_downline_orders_pay_one_referrer() {
    let profiles = vec![
        profile("1", Some("A"), Some("a@example.com")),
        profile("2", Some("B"), Some("b@example.com")),
        profile("3", Some("C"), Some("c@example.com")),
    ];
    let referrals = vec![edge("2", Some("1")), edge("3", Some("1"))];

    let report = simulate(&profiles, &referrals);

    assert_eq!(report.direct_commissions.len(), 1);
    let rec = &report.direct_commissions[0];
    assert_eq!(rec.user_id, "1");
    assert_eq!(rec.full_name, "A");
    assert_eq!(rec.orders_from_downline, 2);
    assert_eq!(rec.total_direct_commission, 38_00);

    assert_eq!(report.pool.simulated_orders, 2);
    assert_eq!(report.pool.pool_contribution, 95_00);
    assert_eq!(report.total_direct_commission_paid, 38_00);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let profiles = vec![
        profile("r1", Some("Referrer One"), Some("r1@example.com")),
        profile("r2", None, Some("r2@example.com")),
        profile("u1", Some("User One"), None),
        profile("u2", Some("User Two"), Some("u2@example.com")),
        profile("u3", None, None),
    ];
    let referrals = vec![
        edge("u1", Some("r1")),
        edge("u2", Some("r2")),
        edge("u3", Some("r1")),
    ];

    let first = simulate(&profiles, &referrals);
    let second = simulate(&profiles, &referrals);

    assert_eq!(first, second, "Same inputs must produce identical reports");
}

#[test]
fn commission_total_conserves_per_order_amount() {
    let profiles = vec![
        profile("a", Some("A"), None),
        profile("b", Some("B"), None),
    ];
    let referrals = vec![
        edge("u1", Some("a")),
        edge("u2", Some("a")),
        edge("u3", Some("b")),
        edge("u4", None), // no referrer: not a qualifying edge
        edge("u5", Some("a")),
    ];

    let report = simulate(&profiles, &referrals);

    let qualifying = 4;
    let summed: i64 = report
        .direct_commissions
        .iter()
        .map(|c| c.total_direct_commission)
        .sum();
    assert_eq!(summed, qualifying * DIRECT_COMMISSION_CENTS);
    assert_eq!(report.total_direct_commission_paid, summed);
    assert_eq!(report.pool.simulated_orders, qualifying as u64);
    assert_eq!(
        report.pool.pool_contribution,
        qualifying * POOL_CONTRIBUTION_CENTS
    );
}

#[test]
fn edges_without_referrer_never_reach_pool_or_commissions() {
    let profiles = vec![profile("a", Some("A"), None)];
    let referrals = vec![edge("u1", None), edge("u2", None)];

    let report = simulate(&profiles, &referrals);

    assert!(report.direct_commissions.is_empty());
    assert_eq!(report.pool.simulated_orders, 0);
    assert_eq!(report.pool.pool_contribution, 0);
}

#[test]
fn referrer_who_is_also_referred_is_counted_per_downline_edge_only() {
    // Chain: a refers b, b refers c. b earns for c's order only;
    // b's own incoming edge credits a, never b.
    let profiles = vec![
        profile("a", Some("A"), None),
        profile("b", Some("B"), None),
        profile("c", Some("C"), None),
    ];
    let referrals = vec![edge("b", Some("a")), edge("c", Some("b"))];

    let report = simulate(&profiles, &referrals);

    assert_eq!(report.direct_commissions.len(), 2);
    for rec in &report.direct_commissions {
        assert_eq!(
            rec.orders_from_downline, 1,
            "{} should earn for exactly one downline order",
            rec.user_id
        );
    }
    assert_eq!(report.pool.simulated_orders, 2);
}

#[test]
fn records_sort_by_commission_descending() {
    let profiles = vec![
        profile("small", Some("Small"), None),
        profile("big", Some("Big"), None),
    ];
    let referrals = vec![
        edge("u1", Some("small")),
        edge("u2", Some("big")),
        edge("u3", Some("big")),
        edge("u4", Some("big")),
    ];

    let report = simulate(&profiles, &referrals);

    assert_eq!(report.direct_commissions[0].user_id, "big");
    assert_eq!(report.direct_commissions[1].user_id, "small");
}

#[test]
fn equal_commissions_keep_first_appearance_order() {
    let profiles = vec![
        profile("x", Some("X"), None),
        profile("y", Some("Y"), None),
        profile("z", Some("Z"), None),
    ];
    // All three referrers earn the same total; the edge order decides.
    let referrals = vec![
        edge("u1", Some("y")),
        edge("u2", Some("x")),
        edge("u3", Some("z")),
    ];

    let report = simulate(&profiles, &referrals);

    let order: Vec<&str> = report
        .direct_commissions
        .iter()
        .map(|c| c.user_id.as_str())
        .collect();
    assert_eq!(order, vec!["y", "x", "z"]);
}

#[test]
fn empty_referrals_yield_empty_report() {
    let profiles = vec![profile("a", Some("A"), None)];

    let report = simulate(&profiles, &[]);

    assert!(report.direct_commissions.is_empty());
    assert_eq!(report.pool.simulated_orders, 0);
    assert_eq!(report.pool.pool_contribution, 0);
    assert_eq!(report.total_direct_commission_paid, 0);
}

#[test]
fn missing_profile_renders_sentinels_and_still_pays() {
    // "ghost" has downline orders but no profile row at all.
    let profiles = vec![profile("named", None, Some("named@example.com"))];
    let referrals = vec![edge("u1", Some("ghost")), edge("u2", Some("named"))];

    let report = simulate(&profiles, &referrals);

    assert_eq!(report.direct_commissions.len(), 2);

    let ghost = report
        .direct_commissions
        .iter()
        .find(|c| c.user_id == "ghost")
        .expect("ghost referrer must still earn");
    assert_eq!(ghost.full_name, MISSING_FIELD);
    assert_eq!(ghost.email, MISSING_FIELD);
    assert_eq!(ghost.total_direct_commission, DIRECT_COMMISSION_CENTS);

    // Profile present but full_name null: only that field falls back.
    let named = report
        .direct_commissions
        .iter()
        .find(|c| c.user_id == "named")
        .expect("named referrer must earn");
    assert_eq!(named.full_name, MISSING_FIELD);
    assert_eq!(named.email, "named@example.com");
}

#[test]
fn profiles_without_edges_contribute_nothing() {
    // Orphan profiles are enrichment data only; they never create
    // orders or commissions on their own.
    let profiles: Vec<Profile> = (0..50)
        .map(|i| profile(&format!("p{i}"), Some("Someone"), None))
        .collect();
    let referrals = vec![edge("p1", Some("p0"))];

    let report = simulate(&profiles, &referrals);

    assert_eq!(report.direct_commissions.len(), 1);
    assert_eq!(report.pool.simulated_orders, 1);
}
