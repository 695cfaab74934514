//! Wall-clock projections for a (zone, instant) pair.
//!
//! Everything here takes the instant explicitly. Callers rendering several
//! cities side by side must sample one instant and pass it to every call;
//! re-sampling between calls can straddle a DST transition and produce
//! clocks that disagree with each other.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;

use crate::catalog::City;
use crate::dayparts::{DayPart, WorkdayPolicy};
use crate::error::Result;
use crate::offset::parse_time_zone;

/// Minutes elapsed since local midnight in `time_zone` at `instant`.
pub fn minutes_of_day_in_zone(time_zone: &str, instant: DateTime<Utc>) -> Result<i32> {
    let local = instant.with_timezone(&parse_time_zone(time_zone)?);
    Ok((local.hour() * 60 + local.minute()) as i32)
}

/// Local time label: `14:03` in 24-hour mode, `02:03 PM` in 12-hour mode.
pub fn format_time_in_zone(
    time_zone: &str,
    instant: DateTime<Utc>,
    hour12: bool,
) -> Result<String> {
    let local = instant.with_timezone(&parse_time_zone(time_zone)?);
    let pattern = if hour12 { "%I:%M %p" } else { "%H:%M" };
    Ok(local.format(pattern).to_string())
}

/// Local date label in the `Thu, Jan 15, 2026` shape.
pub fn format_weekday_and_date_in_zone(
    time_zone: &str,
    instant: DateTime<Utc>,
) -> Result<String> {
    let local = instant.with_timezone(&parse_time_zone(time_zone)?);
    Ok(local.format("%a, %b %d, %Y").to_string())
}

/// One city's clock at one instant.
#[derive(Debug, Clone, Serialize)]
pub struct CitySnapshot {
    pub slug: &'static str,
    pub name: &'static str,
    /// 24-hour local time label.
    pub time_label: String,
    /// Local weekday and date label.
    pub date_label: String,
    /// Minutes since local midnight.
    pub minutes_of_day: i32,
    /// Day part under the default workday policy.
    pub part: DayPart,
}

/// Snapshot a city's wall clock at `instant`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::catalog::city_by_slug;
/// use overlap_engine::clock::city_snapshot;
/// use overlap_engine::dayparts::DayPart;
///
/// let instant = Utc.with_ymd_and_hms(2026, 1, 15, 3, 30, 0).unwrap();
/// let tokyo = city_snapshot(city_by_slug("tokyo").unwrap(), instant).unwrap();
/// assert_eq!(tokyo.time_label, "12:30");
/// assert_eq!(tokyo.part, DayPart::Work);
/// ```
pub fn city_snapshot(city: &City, instant: DateTime<Utc>) -> Result<CitySnapshot> {
    let minutes = minutes_of_day_in_zone(city.time_zone, instant)?;
    Ok(CitySnapshot {
        slug: city.slug,
        name: city.name,
        time_label: format_time_in_zone(city.time_zone, instant, false)?,
        date_label: format_weekday_and_date_in_zone(city.time_zone, instant)?,
        minutes_of_day: minutes,
        part: WorkdayPolicy::default().day_part(minutes),
    })
}
