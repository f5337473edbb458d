//! Presentation of trip reports.
//!
//! Supports a human-readable text layout, JSON serialization and a
//! debug-level dump through `tracing`.

use anyhow::Result;
use std::collections::BTreeMap;
use std::fmt::Write;
use tracing::debug;

use crate::stats::TripReport;

const RULE: &str = "----------------------------------------";

/// Logs the report using Rust's debug pretty-print format.
pub fn print_pretty(report: &TripReport) {
    debug!("{:#?}", report);
}

/// Serializes the report as pretty-printed JSON.
pub fn render_json(report: &TripReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders the report as sectioned text. Durations are shown in hours
/// (total) and minutes (mean).
pub fn render_text(report: &TripReport) -> Result<String> {
    let mut out = String::new();
    write_text(&mut out, report)?;
    Ok(out)
}

fn write_text(out: &mut String, report: &TripReport) -> std::fmt::Result {
    if let Some(source) = &report.source {
        writeln!(out, "Data set: {} ({} trips)", source, report.rows)?;
    } else {
        writeln!(out, "Trips: {}", report.rows)?;
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "Most Frequent Times of Travel")?;
    match &report.time {
        Some(time) => {
            writeln!(out, "  Most common month(s): {}", join(&time.most_common_month))?;
            writeln!(out, "  Most common day(s) of week: {}", join(&time.most_common_day))?;
            writeln!(
                out,
                "  Most common start hour(s): {}",
                join(&time.most_common_start_hour)
            )?;
        }
        None => writeln!(out, "  Start time column missing")?,
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "Most Popular Stations and Trip")?;
    let station = &report.station;
    if station.is_empty() {
        writeln!(out, "  Station columns missing")?;
    }
    if let Some(starts) = &station.most_common_start_station {
        writeln!(out, "  Most common start station: {}", join(starts))?;
    }
    if let Some(ends) = &station.most_common_end_station {
        writeln!(out, "  Most common end station: {}", join(ends))?;
    }
    if let Some(trips) = &station.most_common_trip {
        writeln!(out, "  Most common trip: {}", join(trips))?;
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "Trip Duration")?;
    match &report.duration {
        Some(duration) => {
            writeln!(
                out,
                "  Total travel time: ~{:.2} hours",
                duration.total_travel_time / 3600.0
            )?;
            match duration.average_travel_time {
                Some(avg) => writeln!(out, "  Mean travel time: ~{:.2} mins", avg / 60.0)?,
                None => writeln!(out, "  Mean travel time: n/a")?,
            }
        }
        None => writeln!(out, "  Trip duration column missing")?,
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "User Stats")?;
    let user = &report.user;
    writeln!(out, "  User types: {}", counts(&user.user_type_counts))?;
    writeln!(out, "  Genders: {}", counts(&user.gender_counts))?;
    match user.earliest_year_of_birth {
        Some(year) => writeln!(out, "  Earliest year of birth: {}", year)?,
        None => writeln!(out, "  Earliest year of birth: n/a")?,
    }
    writeln!(out, "{}", RULE)
}

fn join<T: ToString>(values: &[T]) -> String {
    if values.is_empty() {
        return "n/a".to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn counts(map: &BTreeMap<String, usize>) -> String {
    if map.is_empty() {
        return "n/a".to_string();
    }
    map.iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}
