//! Resolution of GPS time of week into absolute timestamps.

use chrono::{DateTime, TimeDelta, Utc};

/// GPS epoch (1980-01-06T00:00:00Z) as a Unix timestamp in seconds.
pub const GPS_EPOCH_UNIX: i64 = 315_964_800;

const SECONDS_PER_WEEK: i64 = 60 * 60 * 24 * 7;

/// Resolves an `iTOW` value against the GPS week in progress at `now`.
///
/// NAV messages only carry the millisecond time of week; the week number is
/// re-derived here from the reference time, not from anything embedded in
/// the message. The result therefore drifts when a message from one week is
/// resolved during the next, and is wrong for recordings replayed long
/// after capture. Callers that need exact semantics must obtain the week
/// number elsewhere; for NAV-PVT the UTC calendar fields do not have this
/// ambiguity at all.
///
/// Taking `now` as a parameter keeps the derivation a pure function; pass
/// a pinned time in tests or [`resolve_tow_now`] in production.
pub fn resolve_tow(itow_ms: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    let weeks = (now.timestamp() - GPS_EPOCH_UNIX).div_euclid(SECONDS_PER_WEEK);
    let unix_ms = (GPS_EPOCH_UNIX + weeks * SECONDS_PER_WEEK) * 1000 + i64::from(itow_ms);
    DateTime::UNIX_EPOCH + TimeDelta::milliseconds(unix_ms)
}

/// [`resolve_tow`] against the system clock.
#[cfg(feature = "std")]
pub fn resolve_tow_now(itow_ms: u32) -> DateTime<Utc> {
    resolve_tow(itow_ms, Utc::now())
}
