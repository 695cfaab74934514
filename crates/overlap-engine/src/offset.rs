//! UTC-offset resolution against the IANA zone database.
//!
//! The zone database is treated as a black box: we never read transition
//! rules directly. For a given instant we take the wall-clock fields the
//! zone reports, reinterpret them as UTC, and subtract the true instant.
//! The difference, rounded to the nearest minute, is the offset. Rounding
//! absorbs the sub-minute offsets very old tzdb entries carry and keeps the
//! rest of the engine in whole minutes.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{OverlapError, Result};

/// Parse an IANA zone identifier.
pub(crate) fn parse_time_zone(s: &str) -> Result<Tz> {
    s.parse::<Tz>()
        .map_err(|_| OverlapError::InvalidTimeZone(format!("'{}'", s)))
}

/// Resolve a zone's UTC offset, in minutes, at `instant`.
///
/// Positive means the zone is ahead of UTC; half- and quarter-hour zones
/// come out as non-multiples of 60. The same identifier yields different
/// values at different instants wherever DST applies, which is why the
/// instant is part of the signature.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimeZone`] if `time_zone` is not a valid
/// IANA identifier. Unknown zones never silently fall back to UTC.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::offset::resolve_offset_minutes;
///
/// let instant = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
/// assert_eq!(resolve_offset_minutes("Asia/Tokyo", instant).unwrap(), 540);
/// assert_eq!(resolve_offset_minutes("Asia/Kolkata", instant).unwrap(), 330);
/// assert!(resolve_offset_minutes("Mars/Olympus", instant).is_err());
/// ```
pub fn resolve_offset_minutes(time_zone: &str, instant: DateTime<Utc>) -> Result<i32> {
    let tz = parse_time_zone(time_zone)?;
    let wall = instant.with_timezone(&tz).naive_local();
    let offset_seconds = (wall.and_utc() - instant).num_seconds();
    // Round to the nearest minute, halves toward positive infinity.
    Ok(((offset_seconds + 30).div_euclid(60)) as i32)
}

/// Whether a zone observes daylight saving time in `reference_year`.
///
/// Heuristic: the offsets at mid-January and mid-July (noon UTC) differ.
/// Any difference counts regardless of direction, so Southern-Hemisphere
/// zones, whose summer is in January, come out right.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimeZone`] for unknown identifiers and
/// [`OverlapError::InvalidOptions`] if `reference_year` is outside the
/// range chrono can represent.
///
/// # Examples
///
/// ```
/// use overlap_engine::offset::observes_dst;
///
/// assert!(observes_dst("America/New_York", 2024).unwrap());
/// assert!(observes_dst("Australia/Sydney", 2024).unwrap());
/// assert!(!observes_dst("Asia/Karachi", 2024).unwrap());
/// ```
pub fn observes_dst(time_zone: &str, reference_year: i32) -> Result<bool> {
    let january = reference_instant(reference_year, 1)?;
    let july = reference_instant(reference_year, 7)?;
    let jan_offset = resolve_offset_minutes(time_zone, january)?;
    let jul_offset = resolve_offset_minutes(time_zone, july)?;
    Ok(jan_offset != jul_offset)
}

fn reference_instant(year: i32, month: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0)
        .single()
        .ok_or_else(|| {
            OverlapError::InvalidOptions(format!("reference year {year} is out of range"))
        })
}
