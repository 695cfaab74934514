//! # overlap-engine
//!
//! Deterministic cross-timezone scheduling math.
//!
//! Given two cities and an instant, the engine resolves each zone's UTC
//! offset from the IANA database, projects one city's 09:00–17:00 work
//! window onto the other's clock, intersects the windows on the wrapping
//! 24-hour circle, and ranks candidate meeting starts by how well they
//! land in both working days.
//!
//! Every function is a pure computation over explicit inputs. The caller
//! supplies the instant; the engine never reads a live clock, so results
//! are reproducible and calls are freely concurrent. Pass the same instant
//! to every call that feeds one rendering, because re-sampling between
//! calls can straddle a DST transition.
//!
//! ## Modules
//!
//! - [`catalog`] — Static city records and free-form lookup
//! - [`offset`] — UTC-offset resolution and the DST observation heuristic
//! - [`dayparts`] — Work / shoulder / sleep classification and the workday policy
//! - [`segment`] — Circular interval math on the wrapping 24-hour clock
//! - [`overlap`] — Mutual work-window segments and offset-difference sentences
//! - [`slots`] — Scored meeting-slot recommendation
//! - [`grid`] — The hour-by-hour comparison grid as data
//! - [`clock`] — Wall-clock projections for a (zone, instant) pair
//! - [`format`] — Offset, `HH:MM`, and day-delta label helpers
//! - [`error`] — Error types

pub mod catalog;
pub mod clock;
pub mod dayparts;
pub mod error;
pub mod format;
pub mod grid;
pub mod offset;
pub mod overlap;
pub mod segment;
pub mod slots;

pub use catalog::{city_by_slug, find_city, City, CITIES};
pub use clock::{
    city_snapshot, format_time_in_zone, format_weekday_and_date_in_zone, minutes_of_day_in_zone,
    CitySnapshot,
};
pub use dayparts::{classify_day_part, DayPart, WorkdayPolicy};
pub use error::OverlapError;
pub use format::{day_delta_suffix, format_offset, minutes_to_hhmm, minutes_to_label, parse_hhmm};
pub use grid::{build_hour_grid, GridCell, GridRow, HourGrid};
pub use offset::{observes_dst, resolve_offset_minutes};
pub use overlap::{
    compute_work_overlap, compute_work_overlap_with_policy, format_offset_diff,
    format_overlap_summary, offset_diff_minutes, OffsetDiff, OverlapSummary, WorkOverlap,
};
pub use segment::{
    circular_segments, project_with_day_delta, total_minutes, wrap_minutes, DaySegment,
    ProjectedMinute, MINUTES_PER_DAY,
};
pub use slots::{
    recommend_slots, recommend_slots_with_scorer, MeetingSlot, SlotCandidate, SlotOptions,
    SlotScorer, WorkHoursScorer,
};
