//! Meeting-slot recommendation: enumerate, score, rank.
//!
//! Candidates are meeting start times on the base city's clock, walked in
//! fixed steps across one day. Each candidate is projected onto the other
//! city's clock, scored by how well both sides' working day covers it, and
//! the top few come back in rank order. Only same-day meetings survive:
//! a candidate that would cross midnight in either city is dropped rather
//! than scored low, because "23:30 today to 00:30 tomorrow" is a different
//! proposition than a low-quality daytime slot.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::City;
use crate::dayparts::{DayPart, WorkdayPolicy};
use crate::error::{OverlapError, Result};
use crate::format::{day_delta_suffix, minutes_to_hhmm};
use crate::offset::resolve_offset_minutes;
use crate::segment::{project_with_day_delta, MINUTES_PER_DAY};

// ── options ─────────────────────────────────────────────────────────────────

/// Knobs for [`recommend_slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions {
    /// Meeting length in minutes. Must be positive.
    pub duration_minutes: i32,
    /// Spacing between candidate starts in minutes. Must be positive.
    pub step_minutes: i32,
    /// Maximum number of recommendations returned. Must be at least 1.
    pub limit: usize,
}

impl Default for SlotOptions {
    /// One-hour meetings on half-hour boundaries, top three back.
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            step_minutes: 30,
            limit: 3,
        }
    }
}

impl SlotOptions {
    fn validate(&self) -> Result<()> {
        if self.duration_minutes <= 0 {
            return Err(OverlapError::InvalidOptions(format!(
                "duration must be positive, got {}",
                self.duration_minutes
            )));
        }
        if self.step_minutes <= 0 {
            return Err(OverlapError::InvalidOptions(format!(
                "step must be positive, got {}",
                self.step_minutes
            )));
        }
        if self.limit == 0 {
            return Err(OverlapError::InvalidOptions(
                "limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ── scoring strategy ────────────────────────────────────────────────────────

/// What a scorer sees for one candidate start.
#[derive(Debug, Clone, Copy)]
pub struct SlotCandidate {
    /// Candidate start on the base clock, minutes of day.
    pub base_start_minutes: i32,
    /// Day part at the meeting midpoint on the base clock.
    pub base_part: DayPart,
    /// Day part at the meeting midpoint on the other clock.
    pub other_part: DayPart,
    /// Whole meeting inside the base city's work window.
    pub base_fully_work: bool,
    /// Whole meeting inside the other city's work window.
    pub other_fully_work: bool,
}

/// Pluggable desirability score; higher is better.
///
/// Equal scores are ordered by the recommender (closest to the 13:00
/// anchor first), so a scorer only has to express preference, not total
/// order.
pub trait SlotScorer {
    fn score(&self, candidate: &SlotCandidate) -> i32;
}

/// Default weights: 2 per side whose midpoint is work, 1 for shoulder,
/// 0 for sleep, plus 1 per side whose whole meeting fits inside the work
/// window. Maximum 6.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkHoursScorer;

impl SlotScorer for WorkHoursScorer {
    fn score(&self, candidate: &SlotCandidate) -> i32 {
        part_score(candidate.base_part)
            + part_score(candidate.other_part)
            + i32::from(candidate.base_fully_work)
            + i32::from(candidate.other_fully_work)
    }
}

fn part_score(part: DayPart) -> i32 {
    match part {
        DayPart::Work => 2,
        DayPart::Shoulder => 1,
        DayPart::Sleep => 0,
    }
}

// ── recommendation ──────────────────────────────────────────────────────────

/// A recommended meeting start, with its occurrence in both cities.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingSlot {
    /// Start on the base clock, minutes of day. Unique per slot.
    pub base_start_minutes: i32,
    /// Start on the other clock, minutes of day.
    pub other_local_minutes: i32,
    /// Calendar days the other city's occurrence is ahead (+) or behind (-).
    pub day_delta: i32,
    /// `HH:MM` start label on the base clock.
    pub base_local_label: String,
    /// `HH:MM` start label on the other clock, with a day-delta suffix
    /// when it falls on another calendar day, e.g. `"08:00 (+1d)"`.
    pub other_local_label: String,
    /// Day part at the midpoint, base clock.
    pub base_part: DayPart,
    /// Day part at the midpoint, other clock.
    pub other_part: DayPart,
    /// Desirability under the scorer in use.
    pub score: i32,
}

/// Recommend meeting start times for two cities under the default scorer.
///
/// # Errors
///
/// Returns [`OverlapError::InvalidTimeZone`] if either city carries an
/// unknown zone identifier, and [`OverlapError::InvalidOptions`] if
/// `options` fails validation. A duration too long for any same-day slot
/// is not an error; it yields an empty list.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use overlap_engine::catalog::city_by_slug;
/// use overlap_engine::slots::{recommend_slots, SlotOptions};
///
/// let instant = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
/// let london = city_by_slug("london").unwrap();
/// let paris = city_by_slug("paris").unwrap();
///
/// let slots = recommend_slots(london, paris, instant, SlotOptions::default()).unwrap();
/// // 13:00 London / 14:00 Paris is squarely inside both working days.
/// assert_eq!(slots[0].base_start_minutes, 780);
/// assert_eq!(slots[0].score, 6);
/// ```
pub fn recommend_slots(
    a: &City,
    b: &City,
    instant: DateTime<Utc>,
    options: SlotOptions,
) -> Result<Vec<MeetingSlot>> {
    recommend_slots_with_scorer(a, b, instant, options, &WorkHoursScorer)
}

/// [`recommend_slots`] with a caller-supplied scoring strategy.
///
/// Ranking is score descending; ties go to the start closest to 13:00 on
/// the base clock, and the underlying sort is stable so equal candidates
/// keep enumeration order.
pub fn recommend_slots_with_scorer(
    a: &City,
    b: &City,
    instant: DateTime<Utc>,
    options: SlotOptions,
    scorer: &dyn SlotScorer,
) -> Result<Vec<MeetingSlot>> {
    options.validate()?;
    let policy = WorkdayPolicy::default();

    let a_offset = resolve_offset_minutes(a.time_zone, instant)?;
    let b_offset = resolve_offset_minutes(b.time_zone, instant)?;
    let delta = b_offset - a_offset;

    let duration = options.duration_minutes;
    let mut slots = Vec::new();

    let mut base_start = 0;
    while base_start + duration <= MINUTES_PER_DAY {
        let projected = project_with_day_delta(base_start, delta);

        // Same-day meetings only. The base side cannot cross midnight
        // (the loop bound stops it); the other side still can.
        if projected.minute + duration > MINUTES_PER_DAY {
            base_start += options.step_minutes;
            continue;
        }

        let base_part = policy.day_part(base_start + duration / 2);
        let other_part = policy.day_part(projected.minute + duration / 2);

        let candidate = SlotCandidate {
            base_start_minutes: base_start,
            base_part,
            other_part,
            base_fully_work: policy.fully_within_work(base_start, duration),
            other_fully_work: policy.fully_within_work(projected.minute, duration),
        };

        slots.push(MeetingSlot {
            base_start_minutes: base_start,
            other_local_minutes: projected.minute,
            day_delta: projected.day_delta,
            base_local_label: minutes_to_hhmm(base_start),
            other_local_label: format!(
                "{}{}",
                minutes_to_hhmm(projected.minute),
                day_delta_suffix(projected.day_delta)
            ),
            base_part,
            other_part,
            score: scorer.score(&candidate),
        });

        base_start += options.step_minutes;
    }

    rank_and_truncate(&mut slots, options.limit);
    Ok(slots)
}

/// Tie-break anchor: 13:00 sits well inside a 9-to-5 day in both frames
/// when the offsets are close.
const IDEAL_START_MINUTE: i32 = 13 * 60;

fn rank_and_truncate(slots: &mut Vec<MeetingSlot>, limit: usize) {
    slots.sort_by(|x, y| {
        y.score.cmp(&x.score).then_with(|| {
            let x_dist = (x.base_start_minutes - IDEAL_START_MINUTE).abs();
            let y_dist = (y.base_start_minutes - IDEAL_START_MINUTE).abs();
            x_dist.cmp(&y_dist)
        })
    });

    // Enumeration already yields unique starts; this guards the contract
    // if the candidate source ever changes.
    let mut seen = HashSet::new();
    slots.retain(|slot| seen.insert(slot.base_start_minutes));
    slots.truncate(limit);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: i32, score: i32) -> MeetingSlot {
        MeetingSlot {
            base_start_minutes: start,
            other_local_minutes: start,
            day_delta: 0,
            base_local_label: minutes_to_hhmm(start),
            other_local_label: minutes_to_hhmm(start),
            base_part: DayPart::Work,
            other_part: DayPart::Work,
            score,
        }
    }

    #[test]
    fn ranking_is_score_then_distance_from_anchor() {
        let mut slots = vec![slot(540, 4), slot(780, 6), slot(810, 6), slot(750, 6)];
        rank_and_truncate(&mut slots, 10);
        let starts: Vec<i32> = slots.iter().map(|s| s.base_start_minutes).collect();
        // 780 is the anchor itself. 810 and 750 are both 30 away, so the
        // stable sort keeps their input order.
        assert_eq!(starts, vec![780, 810, 750, 540]);
    }

    #[test]
    fn duplicate_starts_collapse_to_the_better_ranked_one() {
        let mut slots = vec![slot(780, 6), slot(780, 2), slot(600, 5)];
        rank_and_truncate(&mut slots, 10);
        let starts: Vec<i32> = slots.iter().map(|s| s.base_start_minutes).collect();
        assert_eq!(starts, vec![780, 600]);
    }

    #[test]
    fn default_scorer_peaks_at_six() {
        let best = SlotCandidate {
            base_start_minutes: 780,
            base_part: DayPart::Work,
            other_part: DayPart::Work,
            base_fully_work: true,
            other_fully_work: true,
        };
        assert_eq!(WorkHoursScorer.score(&best), 6);

        let shoulder = SlotCandidate {
            base_part: DayPart::Shoulder,
            other_part: DayPart::Sleep,
            base_fully_work: false,
            other_fully_work: false,
            ..best
        };
        assert_eq!(WorkHoursScorer.score(&shoulder), 1);
    }
}
