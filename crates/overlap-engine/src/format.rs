//! Stateless label helpers shared by the engine and its front ends.

use crate::segment::wrap_minutes;

/// `UTC+05:30` / `UTC-08:00` style label for an offset in minutes.
///
/// Zero formats as `UTC+00:00`. Minutes are always two digits, which keeps
/// half- and quarter-hour zones unambiguous.
///
/// # Examples
///
/// ```
/// use overlap_engine::format::format_offset;
///
/// assert_eq!(format_offset(330), "UTC+05:30");
/// assert_eq!(format_offset(-480), "UTC-08:00");
/// assert_eq!(format_offset(0), "UTC+00:00");
/// ```
pub fn format_offset(offset_minutes: i32) -> String {
    let sign = if offset_minutes >= 0 { '+' } else { '-' };
    let abs = offset_minutes.abs();
    format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// Render a minute of day as a 24-hour `HH:MM` label, normalizing first.
pub fn minutes_to_hhmm(minutes: i32) -> String {
    let m = wrap_minutes(minutes);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Parse an `HH:MM` label back to a minute of day.
///
/// Accepts exactly the shape [`minutes_to_hhmm`] produces: two digits,
/// a colon, two digits, with hours below 24 and minutes below 60.
/// Anything else is `None`.
///
/// # Examples
///
/// ```
/// use overlap_engine::format::parse_hhmm;
///
/// assert_eq!(parse_hhmm("13:05"), Some(785));
/// assert_eq!(parse_hhmm("24:00"), None);
/// assert_eq!(parse_hhmm("9:30"), None);
/// ```
pub fn parse_hhmm(text: &str) -> Option<i32> {
    let (h, m) = text.split_once(':')?;
    let hours = two_digits(h)?;
    let minutes = two_digits(m)?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

fn two_digits(text: &str) -> Option<i32> {
    if text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

/// Render a minute of day for grid headers: `13:05` in 24-hour mode,
/// `1:05 PM` in 12-hour mode.
pub fn minutes_to_label(minutes: i32, hour12: bool) -> String {
    let m = wrap_minutes(minutes);
    let hours = m / 60;
    let mins = m % 60;
    if !hour12 {
        return format!("{hours:02}:{mins:02}");
    }
    let suffix = if hours >= 12 { "PM" } else { "AM" };
    let display_hours = if hours % 12 == 0 { 12 } else { hours % 12 };
    format!("{display_hours}:{mins:02} {suffix}")
}

/// ` (+1d)` / ` (-1d)` suffix for labels that land on another calendar day.
///
/// Zero yields the empty string so the suffix can be appended
/// unconditionally.
pub fn day_delta_suffix(day_delta: i32) -> String {
    match day_delta {
        0 => String::new(),
        1 => " (+1d)".to_string(),
        -1 => " (-1d)".to_string(),
        d if d > 0 => format!(" (+{d}d)"),
        d => format!(" ({d}d)"),
    }
}
