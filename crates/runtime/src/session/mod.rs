//! Expiring per-player sessions.
//!
//! A player holds at most one battle, one rest and one track lead at a time.
//! Sessions carry their own expiry and are evicted lazily: the first lookup
//! after the deadline removes the entry and hands it back as
//! [`Lookup::Expired`] so the caller can settle it. There is no background
//! sweep.

mod battle;
mod registry;
mod rest;
mod track;

pub use battle::BattleSession;
pub use registry::{PlayerSessions, SessionRegistry};
pub use rest::RestSession;
pub use track::TrackLead;

/// Result of an expiry-aware session lookup.
#[derive(Debug)]
pub enum Lookup<'a, T> {
    Absent,
    Active(&'a mut T),
    /// The session had expired and has been removed.
    Expired(T),
}

/// Whole minutes left until `expires_at`, never negative.
pub(crate) fn minutes_until(
    expires_at: chrono::DateTime<chrono::Utc>,
    now: chrono::DateTime<chrono::Utc>,
) -> i64 {
    (expires_at - now).num_seconds().max(0) / 60
}
