use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::analyzers::sanitize::as_timestamp;
use crate::analyzers::types::TimeStats;
use crate::analyzers::utility::modes;
use crate::table::{TripTable, columns};

pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Monday first, matching `Weekday::num_days_from_monday`.
pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Most common month(s), weekday(s) and start hour(s) of travel.
///
/// Returns `None` when the table has no `start_time` column. Start times
/// that do not parse are dropped; each statistic is taken over all
/// surviving timestamps independently.
#[tracing::instrument(skip_all, fields(rows = table.row_count()))]
pub fn time_stats(table: &TripTable) -> Option<TimeStats> {
    let Some(raw) = table.column(columns::START_TIME) else {
        debug!("No start_time column, skipping time stats");
        return None;
    };

    let times: Vec<NaiveDateTime> = raw.iter().filter_map(as_timestamp).collect();
    debug!(
        kept = times.len(),
        dropped = raw.len() - times.len(),
        "Start times sanitized"
    );

    let most_common_month = modes(times.iter().map(|t| t.month0()))
        .into_iter()
        .map(|m| MONTH_NAMES[m as usize].to_string())
        .collect();

    let most_common_day = modes(times.iter().map(|t| t.weekday().num_days_from_monday()))
        .into_iter()
        .map(|d| DAY_NAMES[d as usize].to_string())
        .collect();

    let most_common_start_hour = modes(times.iter().map(|t| t.hour()));

    Some(TimeStats {
        most_common_month,
        most_common_day,
        most_common_start_hour,
    })
}
