//! Tests for the hour-by-hour comparison grid.

use chrono::{TimeZone, Utc};
use overlap_engine::catalog::{city_by_slug, City};
use overlap_engine::dayparts::DayPart;
use overlap_engine::error::OverlapError;
use overlap_engine::grid::build_hour_grid;

fn winter_afternoon() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 14, 3, 0).unwrap()
}

fn city(slug: &str) -> City {
    *city_by_slug(slug).unwrap_or_else(|| panic!("missing city {slug}"))
}

#[test]
fn base_row_is_the_identity_projection() {
    let grid = build_hour_grid(&[city("london"), city("tokyo")], winter_afternoon()).unwrap();

    assert_eq!(grid.base.slug, "london");
    assert_eq!(grid.base_offset_label, "UTC+00:00");
    assert_eq!(grid.base_now_minutes, 843);

    let base_row = &grid.rows[0];
    assert_eq!(base_row.diff_minutes, 0);
    assert_eq!(base_row.current_time_label, "14:03");
    assert_eq!(base_row.cells.len(), 24);
    for (hour, cell) in base_row.cells.iter().enumerate() {
        assert_eq!(cell.hour, hour as i32);
        assert_eq!(cell.local_minutes, hour as i32 * 60);
        assert_eq!(cell.day_delta, 0);
    }
}

#[test]
fn cells_project_ahead_zones_onto_the_next_day() {
    let grid = build_hour_grid(&[city("london"), city("tokyo")], winter_afternoon()).unwrap();

    let tokyo_row = &grid.rows[1];
    assert_eq!(tokyo_row.offset_label, "UTC+09:00");
    assert_eq!(tokyo_row.diff_minutes, 540);
    assert_eq!(tokyo_row.current_time_label, "23:03");

    // 00:00 London is 09:00 Tokyo, same calendar day.
    let first = &tokyo_row.cells[0];
    assert_eq!(first.label, "09:00");
    assert_eq!(first.day_delta, 0);
    assert_eq!(first.part, DayPart::Work);

    // 15:00 London crosses into the next Tokyo day.
    let wrapped = &tokyo_row.cells[15];
    assert_eq!(wrapped.label, "00:00");
    assert_eq!(wrapped.day_delta, 1);
    assert_eq!(wrapped.part, DayPart::Sleep);
}

#[test]
fn cells_project_behind_zones_onto_the_previous_day() {
    let grid = build_hour_grid(&[city("london"), city("new-york")], winter_afternoon()).unwrap();

    let ny_row = &grid.rows[1];
    assert_eq!(ny_row.diff_minutes, -300);

    // 00:00 London is 19:00 New York the previous evening.
    let first = &ny_row.cells[0];
    assert_eq!(first.label, "19:00");
    assert_eq!(first.day_delta, -1);
    assert_eq!(first.part, DayPart::Shoulder);

    // 14:00 London is 09:00 New York, same day.
    let nine = &ny_row.cells[14];
    assert_eq!(nine.label, "09:00");
    assert_eq!(nine.day_delta, 0);
    assert_eq!(nine.part, DayPart::Work);
}

#[test]
fn day_part_samples_mid_hour() {
    // 08:00-09:00 London: the leading edge is shoulder and so is 08:30,
    // but 16:00 London (cell 16) samples 16:30, still work.
    let grid = build_hour_grid(&[city("london")], winter_afternoon()).unwrap();
    let row = &grid.rows[0];
    assert_eq!(row.cells[8].part, DayPart::Shoulder);
    assert_eq!(row.cells[16].part, DayPart::Work);
    // 20:00 samples 20:30, inside the evening shoulder that ends at 21:00.
    assert_eq!(row.cells[20].part, DayPart::Shoulder);
    assert_eq!(row.cells[21].part, DayPart::Sleep);
}

#[test]
fn grid_keeps_input_order_and_length() {
    let cities = [city("paris"), city("delhi"), city("sydney"), city("lima")];
    let grid = build_hour_grid(&cities, winter_afternoon()).unwrap();
    assert_eq!(grid.rows.len(), 4);
    let slugs: Vec<&str> = grid.rows.iter().map(|r| r.city.slug).collect();
    assert_eq!(slugs, vec!["paris", "delhi", "sydney", "lima"]);
}

#[test]
fn empty_city_list_is_rejected() {
    let err = build_hour_grid(&[], winter_afternoon()).unwrap_err();
    assert!(matches!(err, OverlapError::InvalidOptions(_)));
}

#[test]
fn half_hour_offsets_show_in_cell_labels() {
    let grid = build_hour_grid(&[city("london"), city("delhi")], winter_afternoon()).unwrap();
    let delhi_row = &grid.rows[1];
    assert_eq!(delhi_row.offset_label, "UTC+05:30");
    assert_eq!(delhi_row.cells[9].label, "14:30");
    assert_eq!(delhi_row.cells[9].day_delta, 0);
}
