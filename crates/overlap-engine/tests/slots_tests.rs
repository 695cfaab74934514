//! Tests for meeting-slot recommendation and ranking.

use chrono::{TimeZone, Utc};
use overlap_engine::catalog::{city_by_slug, City};
use overlap_engine::dayparts::DayPart;
use overlap_engine::error::OverlapError;
use overlap_engine::slots::{
    recommend_slots, recommend_slots_with_scorer, SlotCandidate, SlotOptions, SlotScorer,
};

fn winter() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

fn city(slug: &str) -> &'static City {
    city_by_slug(slug).unwrap_or_else(|| panic!("missing city {slug}"))
}

/// Options that keep every surviving candidate, for assertions over the
/// whole field.
fn unlimited() -> SlotOptions {
    SlotOptions {
        limit: 100,
        ..SlotOptions::default()
    }
}

#[test]
fn neighbours_get_the_early_afternoon() {
    let slots = recommend_slots(city("london"), city("paris"), winter(), SlotOptions::default())
        .unwrap();

    // 13:00 London / 14:00 Paris is the anchor itself; the two slots half
    // an hour out tie and keep enumeration order.
    let starts: Vec<i32> = slots.iter().map(|s| s.base_start_minutes).collect();
    assert_eq!(starts, vec![780, 750, 810]);

    let top = &slots[0];
    assert_eq!(top.score, 6);
    assert_eq!(top.base_local_label, "13:00");
    assert_eq!(top.other_local_label, "14:00");
    assert_eq!(top.base_part, DayPart::Work);
    assert_eq!(top.other_part, DayPart::Work);
    assert_eq!(top.day_delta, 0);
}

#[test]
fn seven_hours_apart_leaves_one_perfect_slot() {
    // Bangkok runs 7 hours ahead of wintertime London. Only 09:00 London
    // (16:00 Bangkok) keeps the whole hour inside both work windows; the
    // runner-up at 08:30 London trades half an hour of London's morning.
    let slots = recommend_slots(city("london"), city("bangkok"), winter(), unlimited()).unwrap();

    let top = &slots[0];
    assert_eq!(top.base_start_minutes, 540);
    assert_eq!(top.other_local_label, "16:00");
    assert_eq!(top.score, 6);

    assert_eq!(slots[1].base_start_minutes, 510);
    assert_eq!(slots[1].score, 5);
}

#[test]
fn slots_crossing_midnight_on_the_far_side_are_dropped() {
    // With a +7h offset, a 16:30 London start would run 23:30-00:30 in
    // Bangkok. It must be absent, not merely ranked low. A 17:00 start
    // lands cleanly on the next Bangkok morning, so it stays.
    let slots = recommend_slots(city("london"), city("bangkok"), winter(), unlimited()).unwrap();

    assert!(slots.iter().all(|s| s.base_start_minutes != 990));
    let next_morning = slots
        .iter()
        .find(|s| s.base_start_minutes == 1020)
        .expect("17:00 London wraps to 00:00 Bangkok next day");
    assert_eq!(next_morning.other_local_label, "00:00 (+1d)");
    assert_eq!(slots.len(), 46, "one of 47 enumerated starts is dropped");
}

#[test]
fn far_side_slots_carry_day_delta_labels() {
    // London starts from 15:00 onward land on the next Tokyo day.
    let slots = recommend_slots(city("london"), city("tokyo"), winter(), unlimited()).unwrap();

    let wrapped = slots
        .iter()
        .find(|s| s.base_start_minutes == 900)
        .expect("15:00 London survives (00:00 Tokyo next day)");
    assert_eq!(wrapped.other_local_minutes, 0);
    assert_eq!(wrapped.day_delta, 1);
    assert_eq!(wrapped.other_local_label, "00:00 (+1d)");

    // 14:30 London would run 23:30-00:30 in Tokyo and is dropped.
    assert!(slots.iter().all(|s| s.base_start_minutes != 870));
    assert_eq!(slots.len(), 46);
}

#[test]
fn behind_base_slots_carry_negative_day_delta() {
    let slots = recommend_slots(city("tokyo"), city("london"), winter(), unlimited()).unwrap();

    let wrapped = slots
        .iter()
        .find(|s| s.base_start_minutes == 300)
        .expect("05:00 Tokyo survives (20:00 London the day before)");
    assert_eq!(wrapped.day_delta, -1);
    assert_eq!(wrapped.other_local_label, "20:00 (-1d)");
}

#[test]
fn nine_hours_apart_peaks_at_a_compromise_score() {
    // Tokyo and London cannot both be fully at work, so the best slots
    // trade one side's work block against the other's shoulder.
    let slots = recommend_slots(city("tokyo"), city("london"), winter(), SlotOptions::default())
        .unwrap();

    let starts: Vec<i32> = slots.iter().map(|s| s.base_start_minutes).collect();
    assert_eq!(starts, vec![930, 960, 1080]);
    assert!(slots.iter().all(|s| s.score == 4));
}

#[test]
fn same_zone_pair_is_all_work_slots() {
    let slots = recommend_slots(city("berlin"), city("munich"), winter(), SlotOptions::default())
        .unwrap();
    let starts: Vec<i32> = slots.iter().map(|s| s.base_start_minutes).collect();
    assert_eq!(starts, vec![780, 750, 810]);
    assert!(slots.iter().all(|s| s.score == 6 && s.day_delta == 0));
}

#[test]
fn scores_never_increase_down_the_list() {
    let slots = recommend_slots(city("london"), city("new-york"), winter(), unlimited()).unwrap();
    assert!(!slots.is_empty());
    assert!(slots.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn custom_scorer_falls_back_to_the_anchor_tie_break() {
    struct Flat;
    impl SlotScorer for Flat {
        fn score(&self, _candidate: &SlotCandidate) -> i32 {
            0
        }
    }

    let slots = recommend_slots_with_scorer(
        city("london"),
        city("paris"),
        winter(),
        SlotOptions::default(),
        &Flat,
    )
    .unwrap();

    // All scores equal, so distance from 13:00 decides alone.
    assert_eq!(slots[0].base_start_minutes, 780);
    assert!(slots.iter().all(|s| s.score == 0));
}

#[test]
fn half_hour_duration_uses_its_own_midpoint() {
    let options = SlotOptions {
        duration_minutes: 30,
        ..SlotOptions::default()
    };
    let slots = recommend_slots(city("london"), city("paris"), winter(), options).unwrap();
    assert_eq!(slots[0].base_start_minutes, 780);
    assert_eq!(slots[0].score, 6);
}

#[test]
fn overlong_duration_yields_an_empty_list() {
    let options = SlotOptions {
        duration_minutes: 1500,
        ..SlotOptions::default()
    };
    let slots = recommend_slots(city("london"), city("paris"), winter(), options).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn invalid_options_are_rejected_up_front() {
    for options in [
        SlotOptions { duration_minutes: 0, ..SlotOptions::default() },
        SlotOptions { duration_minutes: -60, ..SlotOptions::default() },
        SlotOptions { step_minutes: 0, ..SlotOptions::default() },
        SlotOptions { limit: 0, ..SlotOptions::default() },
    ] {
        let err = recommend_slots(city("london"), city("paris"), winter(), options).unwrap_err();
        assert!(matches!(err, OverlapError::InvalidOptions(_)), "{options:?}");
    }
}

#[test]
fn unknown_zone_surfaces_as_an_error() {
    let ghost = City {
        slug: "ghost",
        name: "Ghost",
        country: "Nowhere",
        time_zone: "Nowhere/Ghost",
    };
    let err = recommend_slots(&ghost, city("london"), winter(), SlotOptions::default())
        .unwrap_err();
    assert!(matches!(err, OverlapError::InvalidTimeZone(_)));
}
