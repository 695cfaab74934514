//! meetzone: find overlapping working hours and meeting times between
//! cities.
//!
//! Every subcommand samples one instant (from `--at` or the system clock)
//! and passes it to every engine call, so a single invocation is always
//! internally consistent even across a DST transition.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Datelike, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;

use overlap_engine::{
    build_hour_grid, city_snapshot, compute_work_overlap, day_delta_suffix, find_city,
    format_offset_diff, format_overlap_summary, minutes_to_hhmm, observes_dst, recommend_slots,
    City, HourGrid, SlotOptions, CITIES,
};

#[derive(Parser)]
#[command(
    name = "meetzone",
    version,
    about = "Find overlapping working hours and meeting times between cities"
)]
struct Cli {
    /// Evaluate at this instant (RFC 3339, e.g. 2026-01-15T14:00:00Z)
    /// instead of now.
    #[arg(long, global = true, value_name = "RFC3339")]
    at: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the city catalog.
    Cities {
        /// Only cities whose name, slug, or country contains this.
        #[arg(long)]
        search: Option<String>,
    },
    /// Current local time and day part in two cities.
    Now { city_a: String, city_b: String },
    /// How far apart two cities' clocks are right now.
    Diff { city_a: String, city_b: String },
    /// Where the 9-5 work windows overlap, in the first city's time.
    Overlap { city_a: String, city_b: String },
    /// Recommend meeting start times that suit both cities.
    Slots {
        city_a: String,
        city_b: String,
        /// Meeting length in minutes.
        #[arg(long, default_value_t = 60)]
        duration: i32,
        /// Spacing between candidate starts in minutes.
        #[arg(long, default_value_t = 30)]
        step: i32,
        /// How many recommendations to print.
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
    /// Hour-by-hour comparison grid; the first city is the base frame.
    Grid {
        /// Two or more cities.
        #[arg(required = true, num_args = 2..)]
        cities: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let instant = match &cli.at {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("invalid --at instant '{text}'"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    match cli.command {
        Command::Cities { ref search } => cmd_cities(search.as_deref(), cli.json),
        Command::Now {
            ref city_a,
            ref city_b,
        } => cmd_now(city_a, city_b, instant, cli.json),
        Command::Diff {
            ref city_a,
            ref city_b,
        } => cmd_diff(city_a, city_b, instant, cli.json),
        Command::Overlap {
            ref city_a,
            ref city_b,
        } => cmd_overlap(city_a, city_b, instant, cli.json),
        Command::Slots {
            ref city_a,
            ref city_b,
            duration,
            step,
            limit,
        } => cmd_slots(city_a, city_b, duration, step, limit, instant, cli.json),
        Command::Grid { ref cities } => cmd_grid(cities, instant, cli.json),
    }
}

fn lookup(query: &str) -> Result<&'static City> {
    find_city(query).ok_or_else(|| anyhow!("unknown city '{query}' (try `meetzone cities`)"))
}

fn cmd_cities(search: Option<&str>, json: bool) -> Result<()> {
    let needle = search.map(str::to_lowercase);
    let listed: Vec<City> = CITIES
        .iter()
        .copied()
        .filter(|c| match &needle {
            Some(n) => {
                c.name.to_lowercase().contains(n.as_str())
                    || c.slug.contains(n.as_str())
                    || c.country.to_lowercase().contains(n.as_str())
            }
            None => true,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listed)?);
        return Ok(());
    }
    if listed.is_empty() {
        println!("No cities match '{}'.", search.unwrap_or_default());
        return Ok(());
    }
    for c in &listed {
        println!("{:<18} {:<22} {:<24} {}", c.slug, c.name, c.country, c.time_zone);
    }
    Ok(())
}

fn cmd_now(city_a: &str, city_b: &str, instant: DateTime<Utc>, json: bool) -> Result<()> {
    let a = city_snapshot(lookup(city_a)?, instant)?;
    let b = city_snapshot(lookup(city_b)?, instant)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&[&a, &b])?);
        return Ok(());
    }
    for snap in [&a, &b] {
        println!(
            "{:<18} {}  {}  {}",
            snap.name, snap.time_label, snap.date_label, snap.part
        );
    }
    Ok(())
}

fn cmd_diff(city_a: &str, city_b: &str, instant: DateTime<Utc>, json: bool) -> Result<()> {
    let diff = format_offset_diff(lookup(city_a)?, lookup(city_b)?, instant)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
        return Ok(());
    }
    println!("{}", diff.text);
    Ok(())
}

fn cmd_overlap(city_a: &str, city_b: &str, instant: DateTime<Utc>, json: bool) -> Result<()> {
    let a = lookup(city_a)?;
    let b = lookup(city_b)?;

    let overlap = compute_work_overlap(a, b, instant)?;
    let summary = format_overlap_summary(a, b, instant)?;
    let year = instant.year();
    let a_dst = observes_dst(a.time_zone, year)?;
    let b_dst = observes_dst(b.time_zone, year)?;

    if json {
        let payload = json!({
            "base": a.slug,
            "other": b.slug,
            "base_offset": overlap.base_offset,
            "other_offset": overlap.other_offset,
            "base_observes_dst": a_dst,
            "other_observes_dst": b_dst,
            "segments": overlap.segments,
            "summary": summary.summary,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{} {} / {} {}", a.name, overlap.base_offset, b.name, overlap.other_offset);
    for (city, dst) in [(a, a_dst), (b, b_dst)] {
        let verb = if dst { "observes" } else { "does not observe" };
        println!("{} {} daylight saving time in {}.", city.name, verb, year);
    }
    if overlap.segments.is_empty() {
        println!("No shared 9-5 window.");
    } else {
        for segment in &overlap.segments {
            println!(
                "Both working ({} time): {}-{} ({} min)",
                a.name,
                minutes_to_hhmm(segment.start),
                minutes_to_hhmm(segment.end),
                segment.duration_minutes()
            );
        }
    }
    println!("{}", summary.summary);
    Ok(())
}

fn cmd_slots(
    city_a: &str,
    city_b: &str,
    duration: i32,
    step: i32,
    limit: usize,
    instant: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let a = lookup(city_a)?;
    let b = lookup(city_b)?;
    let options = SlotOptions {
        duration_minutes: duration,
        step_minutes: step,
        limit,
    };
    let slots = recommend_slots(a, b, instant, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }
    if slots.is_empty() {
        println!("No same-day slot works for both cities with these settings.");
        return Ok(());
    }
    for (rank, slot) in slots.iter().enumerate() {
        println!(
            "{}. {} {} ({}) / {} {} ({})  score {}",
            rank + 1,
            a.name,
            slot.base_local_label,
            slot.base_part,
            b.name,
            slot.other_local_label,
            slot.other_part,
            slot.score
        );
    }
    Ok(())
}

fn cmd_grid(cities: &[String], instant: DateTime<Utc>, json: bool) -> Result<()> {
    let resolved: Vec<City> = cities
        .iter()
        .map(|query| lookup(query).copied())
        .collect::<Result<_>>()?;
    let grid = build_hour_grid(&resolved, instant)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&grid)?);
        return Ok(());
    }
    render_grid(&grid);
    Ok(())
}

fn render_grid(grid: &HourGrid) {
    let mut names = format!("{:<7}", "hour");
    let mut offsets = format!("{:<7}", "");
    let mut nows = format!("{:<7}", "");
    for row in &grid.rows {
        names.push_str(&format!("{:<24}", row.city.name));
        offsets.push_str(&format!("{:<24}", row.offset_label));
        nows.push_str(&format!("{:<24}", format!("now {}", row.current_time_label)));
    }
    println!("{}", names.trim_end());
    println!("{}", offsets.trim_end());
    println!("{}", nows.trim_end());

    for hour in 0..24 {
        let mut line = format!("{:<7}", format!("{hour:02}:00"));
        for row in &grid.rows {
            let cell = &row.cells[hour];
            let label = format!(
                "{}{} {}",
                cell.label,
                day_delta_suffix(cell.day_delta),
                cell.part
            );
            line.push_str(&format!("{label:<24}"));
        }
        println!("{}", line.trim_end());
    }
}
