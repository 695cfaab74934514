//! Day-part classification: is a local minute work, shoulder, or sleep?

use std::fmt;

use serde::Serialize;

use crate::segment::{wrap_minutes, MINUTES_PER_DAY};

/// Coarse classification of a local minute of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPart {
    /// Inside the working window.
    Work,
    /// Plausible but not ideal: early morning or evening.
    Shoulder,
    /// Everything else.
    Sleep,
}

impl fmt::Display for DayPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayPart::Work => write!(f, "work"),
            DayPart::Shoulder => write!(f, "shoulder"),
            DayPart::Sleep => write!(f, "sleep"),
        }
    }
}

/// Work-window and shoulder boundaries, in minutes of day.
///
/// The morning shoulder is `[shoulder_start, work_start)` and the evening
/// shoulder is `[work_end, shoulder_end)`; where the ranges would meet, the
/// work window wins. The default is the fixed 09:00–17:00 day with
/// 07:00–09:00 and 17:00–21:00 shoulders that every city is assumed to
/// share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkdayPolicy {
    /// First working minute (inclusive).
    pub work_start: i32,
    /// First minute after work (exclusive).
    pub work_end: i32,
    /// First morning-shoulder minute (inclusive).
    pub shoulder_start: i32,
    /// First minute after the evening shoulder (exclusive).
    pub shoulder_end: i32,
}

impl Default for WorkdayPolicy {
    fn default() -> Self {
        Self {
            work_start: 9 * 60,
            work_end: 17 * 60,
            shoulder_start: 7 * 60,
            shoulder_end: 21 * 60,
        }
    }
}

impl WorkdayPolicy {
    /// Classify a minute of day.
    ///
    /// Total over all of `i32`: the input is normalized into `[0, 1440)`
    /// first, so midpoint sums and projected minutes can be passed raw.
    pub fn day_part(&self, minute_of_day: i32) -> DayPart {
        let m = wrap_minutes(minute_of_day);
        if m >= self.work_start && m < self.work_end {
            return DayPart::Work;
        }
        let morning = m >= self.shoulder_start && m < self.work_start;
        let evening = m >= self.work_end && m < self.shoulder_end;
        if morning || evening {
            DayPart::Shoulder
        } else {
            DayPart::Sleep
        }
    }

    /// Whether a meeting starting at `start_minute` and running
    /// `duration_minutes` sits entirely inside the work window.
    ///
    /// A meeting whose end reaches past midnight never qualifies, whatever
    /// the window boundaries say.
    pub fn fully_within_work(&self, start_minute: i32, duration_minutes: i32) -> bool {
        let start = wrap_minutes(start_minute);
        let end = start + duration_minutes;
        if end >= MINUTES_PER_DAY {
            return false;
        }
        start >= self.work_start && end <= self.work_end
    }
}

/// Classify a minute of day under the default 09:00–17:00 policy.
///
/// # Examples
///
/// ```
/// use overlap_engine::dayparts::{classify_day_part, DayPart};
///
/// assert_eq!(classify_day_part(10 * 60), DayPart::Work);
/// assert_eq!(classify_day_part(8 * 60), DayPart::Shoulder);
/// assert_eq!(classify_day_part(2 * 60), DayPart::Sleep);
/// // Inputs outside [0, 1440) wrap around.
/// assert_eq!(classify_day_part(10 * 60 + 1440), DayPart::Work);
/// ```
pub fn classify_day_part(minute_of_day: i32) -> DayPart {
    WorkdayPolicy::default().day_part(minute_of_day)
}
