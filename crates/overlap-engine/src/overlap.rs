//! Working-hours overlap between two cities, expressed in one city's frame.
//!
//! The projection trick: if the other city's clock runs `delta` minutes
//! ahead of the base city's, then the other city's 09:00 happens at
//! `09:00 - delta` on the base clock. Shifting the other work window by
//! `-delta`, splitting it on the midnight wrap, and intersecting with the
//! base work window gives the mutual segments without ever enumerating
//! minutes.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::City;
use crate::dayparts::WorkdayPolicy;
use crate::error::Result;
use crate::format::{format_offset, minutes_to_hhmm};
use crate::offset::resolve_offset_minutes;
use crate::segment::{circular_segments, DaySegment};

// ── offset difference ───────────────────────────────────────────────────────

/// Signed clock difference in minutes at `instant`; positive means `a` is
/// ahead of `b`.
pub fn offset_diff_minutes(a: &City, b: &City, instant: DateTime<Utc>) -> Result<i32> {
    let a_offset = resolve_offset_minutes(a.time_zone, instant)?;
    let b_offset = resolve_offset_minutes(b.time_zone, instant)?;
    Ok(a_offset - b_offset)
}

/// A clock difference with its one-line description.
#[derive(Debug, Clone, Serialize)]
pub struct OffsetDiff {
    /// E.g. `"Paris is 1 hour ahead of London."`
    pub text: String,
    /// Signed difference in minutes; positive means the first city is ahead.
    pub minutes: i32,
}

/// Describe how far `a`'s clock sits from `b`'s at `instant`.
///
/// Whole-hour differences read as `"2 hours"`, fractional ones as
/// `"5h 30m"`. A zero difference gets its own sentence because
/// `"0 hours ahead"` reads wrong.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::catalog::city_by_slug;
/// use overlap_engine::overlap::format_offset_diff;
///
/// let instant = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
/// let paris = city_by_slug("paris").unwrap();
/// let london = city_by_slug("london").unwrap();
///
/// let diff = format_offset_diff(paris, london, instant).unwrap();
/// assert_eq!(diff.minutes, 60);
/// assert_eq!(diff.text, "Paris is 1 hour ahead of London.");
/// ```
pub fn format_offset_diff(a: &City, b: &City, instant: DateTime<Utc>) -> Result<OffsetDiff> {
    let minutes = offset_diff_minutes(a, b, instant)?;
    let abs = minutes.abs();
    let (hours, rem) = (abs / 60, abs % 60);
    let span = if rem == 0 {
        format!("{hours} hour{}", if hours == 1 { "" } else { "s" })
    } else {
        format!("{hours}h {rem}m")
    };
    let text = if minutes == 0 {
        format!(
            "{} and {} are in the same time zone right now.",
            a.name, b.name
        )
    } else if minutes > 0 {
        format!("{} is {span} ahead of {}.", a.name, b.name)
    } else {
        format!("{} is {span} behind {}.", a.name, b.name)
    };
    Ok(OffsetDiff { text, minutes })
}

// ── work-window overlap ─────────────────────────────────────────────────────

/// Mutual working-hours segments, in the base city's minute-of-day frame.
#[derive(Debug, Clone, Serialize)]
pub struct WorkOverlap {
    /// Base city's offset label, e.g. `"UTC+00:00"`.
    pub base_offset: String,
    /// Other city's offset label.
    pub other_offset: String,
    /// Disjoint, ascending segments; empty when the windows never meet.
    pub segments: Vec<DaySegment>,
}

/// Segments of the day where both cities sit inside the default
/// 09:00–17:00 work window, expressed on the base city's clock.
///
/// Symmetric in total length: swapping the cities shifts the segment
/// positions into the other frame but never changes the summed minutes.
///
/// # Errors
///
/// Returns [`crate::error::OverlapError::InvalidTimeZone`] if either city
/// carries an unknown zone identifier.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::catalog::city_by_slug;
/// use overlap_engine::overlap::compute_work_overlap;
/// use overlap_engine::segment::DaySegment;
///
/// let instant = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
/// let london = city_by_slug("london").unwrap();
/// let paris = city_by_slug("paris").unwrap();
///
/// let overlap = compute_work_overlap(london, paris, instant).unwrap();
/// // Paris runs an hour ahead, so the shared window is 09:00-16:00 London.
/// assert_eq!(overlap.segments, vec![DaySegment { start: 540, end: 960 }]);
/// ```
pub fn compute_work_overlap(base: &City, other: &City, instant: DateTime<Utc>) -> Result<WorkOverlap> {
    compute_work_overlap_with_policy(base, other, instant, &WorkdayPolicy::default())
}

/// [`compute_work_overlap`] under an alternate work window.
pub fn compute_work_overlap_with_policy(
    base: &City,
    other: &City,
    instant: DateTime<Utc>,
    policy: &WorkdayPolicy,
) -> Result<WorkOverlap> {
    let base_offset = resolve_offset_minutes(base.time_zone, instant)?;
    let other_offset = resolve_offset_minutes(other.time_zone, instant)?;

    // Minutes the other clock leads the base clock.
    let delta = other_offset - base_offset;

    let base_work = DaySegment {
        start: policy.work_start,
        end: policy.work_end,
    };

    let mut segments: Vec<DaySegment> =
        circular_segments(policy.work_start - delta, policy.work_end - delta)
            .iter()
            .filter_map(|shifted| base_work.intersect(shifted))
            .collect();
    segments.sort_by_key(|s| s.start);

    Ok(WorkOverlap {
        base_offset: format_offset(base_offset),
        other_offset: format_offset(other_offset),
        segments,
    })
}

// ── overlap summary ─────────────────────────────────────────────────────────

/// Overlap segments plus a one-line summary for display.
#[derive(Debug, Clone, Serialize)]
pub struct OverlapSummary {
    /// Either the typical-overlap sentence or the no-overlap guidance.
    pub summary: String,
    /// The segments the sentence was derived from, base frame.
    pub segments: Vec<DaySegment>,
}

const NO_OVERLAP_SUMMARY: &str = "There is no full overlap where both cities are within \
     9:00–17:00 at the same time. Use shoulder hours for one side, or split into async updates.";

/// Summarize the work-window overlap between two cities in one sentence.
///
/// Picks the longest overlap segment (earliest wins a length tie) and
/// renders it in the first city's local time. When there is no overlap at
/// all, the sentence suggests shoulder hours or async work instead.
pub fn format_overlap_summary(a: &City, b: &City, instant: DateTime<Utc>) -> Result<OverlapSummary> {
    let overlap = compute_work_overlap(a, b, instant)?;
    let segments = overlap.segments;

    let Some(best) = best_segment(&segments) else {
        return Ok(OverlapSummary {
            summary: NO_OVERLAP_SUMMARY.to_string(),
            segments,
        });
    };

    let summary = format!(
        "Typical 9–5 overlap (in {} time): {}–{}.",
        a.name,
        minutes_to_hhmm(best.start),
        minutes_to_hhmm(best.end),
    );
    Ok(OverlapSummary { summary, segments })
}

/// Longest segment; earliest start breaks ties.
fn best_segment(segments: &[DaySegment]) -> Option<DaySegment> {
    segments
        .iter()
        .copied()
        .max_by_key(|s| (s.duration_minutes(), std::cmp::Reverse(s.start)))
}
