//! Circular interval math on the wrapping 24-hour clock.
//!
//! Minutes of day live on a circle of size [`MINUTES_PER_DAY`]. A window
//! that crosses midnight is never represented with `start > end`; instead
//! [`circular_segments`] splits it into at most two linear half-open
//! segments, and everything downstream works on those. All arithmetic
//! normalizes into `[0, 1440)` first, so callers can feed raw sums and
//! differences (offset deltas can be negative or exceed a day).

use serde::Serialize;

/// Minutes in one day on the wrapping clock.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Normalize a minute count into `[0, 1440)`.
///
/// Works for any `i32`, including negatives: `rem_euclid` keeps the result
/// non-negative where plain `%` would not.
///
/// # Examples
///
/// ```
/// use overlap_engine::segment::wrap_minutes;
///
/// assert_eq!(wrap_minutes(1500), 60);
/// assert_eq!(wrap_minutes(-30), 1410);
/// assert_eq!(wrap_minutes(1440), 0);
/// ```
pub fn wrap_minutes(minutes: i32) -> i32 {
    minutes.rem_euclid(MINUTES_PER_DAY)
}

/// A linear (non-wrapping) half-open minute-of-day interval `[start, end)`.
///
/// Segments produced by [`circular_segments`] always satisfy
/// `0 <= start < end <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySegment {
    pub start: i32,
    pub end: i32,
}

impl DaySegment {
    /// Length of the segment in minutes.
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }

    /// Linear intersection: latest start to earliest end, `None` when that
    /// is empty. Half-open semantics mean adjacent segments do not
    /// intersect.
    pub fn intersect(&self, other: &DaySegment) -> Option<DaySegment> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end <= start {
            None
        } else {
            Some(DaySegment { start, end })
        }
    }
}

/// Split a possibly midnight-crossing window into linear segments.
///
/// Endpoints are normalized first. Three shapes come out:
///
/// - `start < end` after normalization: one segment.
/// - `start > end`: the window wraps, so it becomes `[start, 1440)` plus
///   `[0, end)`.
/// - `start == end`: treated as the degenerate full-day window rather than
///   an empty one. An eight-hour work window never hits this case, but the
///   split must not misbehave when a caller does.
///
/// # Examples
///
/// ```
/// use overlap_engine::segment::{circular_segments, DaySegment};
///
/// assert_eq!(
///     circular_segments(1380, 180),
///     vec![
///         DaySegment { start: 1380, end: 1440 },
///         DaySegment { start: 0, end: 180 },
///     ],
/// );
/// assert_eq!(
///     circular_segments(540, 1020),
///     vec![DaySegment { start: 540, end: 1020 }],
/// );
/// ```
pub fn circular_segments(start: i32, end: i32) -> Vec<DaySegment> {
    let s = wrap_minutes(start);
    let e = wrap_minutes(end);
    if s == e {
        return vec![DaySegment {
            start: 0,
            end: MINUTES_PER_DAY,
        }];
    }
    if s < e {
        return vec![DaySegment { start: s, end: e }];
    }
    vec![
        DaySegment {
            start: s,
            end: MINUTES_PER_DAY,
        },
        DaySegment { start: 0, end: e },
    ]
}

/// Sum of segment durations in minutes.
pub fn total_minutes(segments: &[DaySegment]) -> i32 {
    segments.iter().map(DaySegment::duration_minutes).sum()
}

/// A minute of day projected onto another local clock: the normalized
/// minute plus how many calendar-day boundaries the projection crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectedMinute {
    /// Minute of day on the target clock, in `[0, 1440)`.
    pub minute: i32,
    /// Calendar days the target is ahead (+) or behind (-) the source day.
    pub day_delta: i32,
}

/// Shift `base_minute` by `delta_minutes` and decompose the result into a
/// normalized minute of day and a day delta.
///
/// # Examples
///
/// ```
/// use overlap_engine::segment::{project_with_day_delta, ProjectedMinute};
///
/// // 23:00 plus two hours lands at 01:00 tomorrow.
/// assert_eq!(
///     project_with_day_delta(1380, 120),
///     ProjectedMinute { minute: 60, day_delta: 1 },
/// );
/// // 01:00 minus two hours lands at 23:00 yesterday.
/// assert_eq!(
///     project_with_day_delta(60, -120),
///     ProjectedMinute { minute: 1380, day_delta: -1 },
/// );
/// ```
pub fn project_with_day_delta(base_minute: i32, delta_minutes: i32) -> ProjectedMinute {
    let raw = base_minute + delta_minutes;
    ProjectedMinute {
        minute: raw.rem_euclid(MINUTES_PER_DAY),
        day_delta: raw.div_euclid(MINUTES_PER_DAY),
    }
}
