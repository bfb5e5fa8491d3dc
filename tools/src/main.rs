//! payout-sim: headless referral payout estimator.
//!
//! Usage:
//!   payout-sim --db network.db
//!   payout-sim --snapshot network.json [--json]
//!   payout-sim --generate 500 --seed 7 --db network.db
//!
//! Exactly one data source (--db or --snapshot) feeds the simulation.
//! With --generate N, a deterministic synthetic network is written to
//! the chosen source first, then simulated.

use anyhow::{bail, Result};
use payout_core::{
    fixture::{self, FixtureParams},
    records::{Profile, ReferralEdge},
    simulator::simulate,
    snapshot::NetworkSnapshot,
    store::NetworkStore,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = str_arg(&args, "--db");
    let snapshot = str_arg(&args, "--snapshot");
    let generate: Option<usize> = opt_arg(&args, "--generate");
    let seed: u64 = opt_arg(&args, "--seed").unwrap_or(42);
    let json = args.iter().any(|a| a == "--json");

    if db.is_some() && snapshot.is_some() {
        bail!("--db and --snapshot are mutually exclusive; pick one source");
    }
    if db.is_none() && snapshot.is_none() {
        bail!(
            "no data source: pass --db PATH or --snapshot PATH \
             (add --generate N to seed it with a synthetic network)"
        );
    }

    if let Some(population) = generate {
        let params = FixtureParams {
            seed,
            population,
            ..FixtureParams::default()
        };
        let network = fixture::generate(&params);
        match (db, snapshot) {
            (Some(path), _) => {
                let store = NetworkStore::open(path)?;
                store.migrate()?;
                for profile in &network.profiles {
                    store.insert_profile(profile)?;
                }
                for edge in &network.referrals {
                    store.insert_referral(edge)?;
                }
                log::info!("seeded {path} with synthetic network");
            }
            (None, Some(path)) => {
                network.save(Path::new(path))?;
                log::info!("wrote synthetic snapshot to {path}");
            }
            (None, None) => unreachable!("source presence checked above"),
        }
    }

    let (profiles, referrals, source) = load_network(db, snapshot)?;
    log::info!(
        "loaded {} profiles, {} referral edges from {source}",
        profiles.len(),
        referrals.len()
    );

    let report = simulate(&profiles, &referrals);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("payout-sim - referral payout estimator");
        println!("  source:    {source}");
        println!("  run at:    {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        println!();
        print!("{}", report.render_text());
    }

    Ok(())
}

/// Fetch both relations, fully materialized, from the selected source.
fn load_network(
    db: Option<&str>,
    snapshot: Option<&str>,
) -> Result<(Vec<Profile>, Vec<ReferralEdge>, String)> {
    match (db, snapshot) {
        (Some(path), _) => {
            let store = NetworkStore::open(path)?;
            store.migrate()?;
            let profiles = store.fetch_profiles()?;
            let referrals = store.fetch_referrals()?;
            Ok((profiles, referrals, format!("sqlite:{path}")))
        }
        (None, Some(path)) => {
            let network = NetworkSnapshot::load(Path::new(path))?;
            Ok((
                network.profiles,
                network.referrals,
                format!("snapshot:{path}"),
            ))
        }
        (None, None) => unreachable!("source presence checked in main"),
    }
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn opt_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
}
