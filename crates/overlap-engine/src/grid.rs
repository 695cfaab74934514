//! The hour-by-hour comparison grid as plain data.
//!
//! One city anchors the frame; every row shows what each of its 24 hours
//! looks like on another city's clock. The grid carries no styling or
//! layout, just the numbers and labels a renderer needs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::City;
use crate::clock::{format_time_in_zone, minutes_of_day_in_zone};
use crate::dayparts::{DayPart, WorkdayPolicy};
use crate::error::{OverlapError, Result};
use crate::format::{format_offset, minutes_to_hhmm};
use crate::offset::resolve_offset_minutes;
use crate::segment::project_with_day_delta;

/// One cell: the base city's hour `hour` seen on this row's clock.
#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    /// Hour of day on the base clock, 0 through 23.
    pub hour: i32,
    /// Minute of day on this row's clock.
    pub local_minutes: i32,
    /// `HH:MM` label for `local_minutes`.
    pub label: String,
    /// Day part for the cell, sampled at the middle of the hour so the
    /// cell reads as its dominant part rather than its leading edge.
    pub part: DayPart,
    /// Calendar days this cell is ahead (+) or behind (-) the base day.
    pub day_delta: i32,
}

/// One city's row across the 24 base-frame hours.
#[derive(Debug, Clone, Serialize)]
pub struct GridRow {
    pub city: City,
    /// Offset label at the grid's instant, e.g. `"UTC+09:00"`.
    pub offset_label: String,
    /// Signed minutes this city's clock leads the base clock.
    pub diff_minutes: i32,
    /// 24-hour local time label at the grid's instant.
    pub current_time_label: String,
    pub cells: Vec<GridCell>,
}

/// The whole grid, anchored on the first city's frame.
#[derive(Debug, Clone, Serialize)]
pub struct HourGrid {
    pub base: City,
    pub base_offset_label: String,
    /// Minute of day in the base city at the grid's instant.
    pub base_now_minutes: i32,
    /// One row per input city, base city first.
    pub rows: Vec<GridRow>,
}

/// Build hourly comparison rows for `cities` at `instant`.
///
/// The first city is the base frame; its own row comes back too, so a
/// renderer can treat every row uniformly.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidOptions`] when `cities` is empty and
/// [`OverlapError::InvalidTimeZone`] when any city carries an unknown
/// zone identifier.
pub fn build_hour_grid(cities: &[City], instant: DateTime<Utc>) -> Result<HourGrid> {
    let Some(base) = cities.first() else {
        return Err(OverlapError::InvalidOptions(
            "the grid needs at least one city".to_string(),
        ));
    };

    let policy = WorkdayPolicy::default();
    let base_offset = resolve_offset_minutes(base.time_zone, instant)?;

    let mut rows = Vec::with_capacity(cities.len());
    for city in cities {
        let offset = resolve_offset_minutes(city.time_zone, instant)?;
        let diff = offset - base_offset;

        let cells = (0..24)
            .map(|hour| {
                let projected = project_with_day_delta(hour * 60, diff);
                GridCell {
                    hour,
                    local_minutes: projected.minute,
                    label: minutes_to_hhmm(projected.minute),
                    part: policy.day_part(projected.minute + 30),
                    day_delta: projected.day_delta,
                }
            })
            .collect();

        rows.push(GridRow {
            city: *city,
            offset_label: format_offset(offset),
            diff_minutes: diff,
            current_time_label: format_time_in_zone(city.time_zone, instant, false)?,
            cells,
        });
    }

    Ok(HourGrid {
        base: *base,
        base_offset_label: format_offset(base_offset),
        base_now_minutes: minutes_of_day_in_zone(base.time_zone, instant)?,
        rows,
    })
}
