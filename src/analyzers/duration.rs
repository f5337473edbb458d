use tracing::debug;

use crate::analyzers::sanitize::as_positive_number;
use crate::analyzers::types::DurationStats;
use crate::analyzers::utility::mean;
use crate::table::{TripTable, columns};

/// Total and mean trip duration over strictly positive numeric values.
///
/// Returns `None` when the table has no `trip_duration` column. If the
/// column exists but nothing survives cleaning, the total is `0.0` and
/// the average is `None`.
#[tracing::instrument(skip_all, fields(rows = table.row_count()))]
pub fn duration_stats(table: &TripTable) -> Option<DurationStats> {
    let Some(raw) = table.column(columns::TRIP_DURATION) else {
        debug!("No trip_duration column, skipping duration stats");
        return None;
    };

    let durations: Vec<f64> = raw.iter().filter_map(as_positive_number).collect();
    debug!(
        kept = durations.len(),
        dropped = raw.len() - durations.len(),
        "Trip durations sanitized"
    );

    Some(DurationStats {
        total_travel_time: durations.iter().sum(),
        average_travel_time: mean(&durations),
    })
}
