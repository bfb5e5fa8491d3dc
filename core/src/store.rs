//! SQLite fetch collaborator.
//!
//! RULE: Only store.rs talks to the database. The simulator consumes
//! the typed records this module returns; it never sees a row.
//!
//! The store is read-mostly: the insert helpers exist for fixture
//! seeding and tests, never for persisting simulation output.

use crate::{
    error::SimResult,
    records::{Profile, ReferralEdge},
};
use rusqlite::{params, Connection};

pub struct NetworkStore {
    conn: Connection,
}

impl NetworkStore {
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply the schema. Safe to call on an already-migrated database.
    pub fn migrate(&self) -> SimResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_referral_network.sql"))?;
        Ok(())
    }

    // ── Fetch (the read-only surface the simulator runs over) ─────────

    /// Read all profiles, ordered by id so repeated runs over the same
    /// database enumerate identically.
    pub fn fetch_profiles(&self) -> SimResult<Vec<Profile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, full_name, email FROM profiles ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Profile {
                id: row.get(0)?,
                full_name: row.get(1)?,
                email: row.get(2)?,
            })
        })?;
        let profiles = rows.collect::<Result<Vec<_>, _>>()?;
        log::debug!("fetched {} profiles", profiles.len());
        Ok(profiles)
    }

    /// Read all referral edges, ordered by referred user id. The order
    /// fixes the simulator's tie-break, so it must be deterministic.
    pub fn fetch_referrals(&self) -> SimResult<Vec<ReferralEdge>> {
        let mut stmt = self.conn.prepare(
            "SELECT referred_user_id, referrer_id FROM referrals
             ORDER BY referred_user_id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ReferralEdge {
                referred_user_id: row.get(0)?,
                referrer_id: row.get(1)?,
            })
        })?;
        let referrals = rows.collect::<Result<Vec<_>, _>>()?;
        log::debug!("fetched {} referral edges", referrals.len());
        Ok(referrals)
    }

    // ── Seeding (fixture generation and tests only) ───────────────────

    pub fn insert_profile(&self, p: &Profile) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO profiles (id, full_name, email) VALUES (?1, ?2, ?3)",
            params![&p.id, &p.full_name, &p.email],
        )?;
        Ok(())
    }

    pub fn insert_referral(&self, e: &ReferralEdge) -> SimResult<()> {
        self.conn.execute(
            "INSERT INTO referrals (referred_user_id, referrer_id) VALUES (?1, ?2)",
            params![&e.referred_user_id, &e.referrer_id],
        )?;
        Ok(())
    }

    pub fn profile_count(&self) -> SimResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))?;
        Ok(n)
    }

    pub fn referral_count(&self) -> SimResult<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM referrals", [], |row| row.get(0))?;
        Ok(n)
    }
}
