use tracing::debug;

use crate::analyzers::sanitize::as_station;
use crate::analyzers::types::StationStats;
use crate::analyzers::utility::modes;
use crate::table::{RawValue, TripTable, columns};

/// Most popular start station, end station and start -> end trip.
///
/// Each station column is cleaned on its own, so a row with a bad end
/// station still counts toward the start-station mode. Only rows valid on
/// both sides feed the trip mode.
#[tracing::instrument(skip_all, fields(rows = table.row_count()))]
pub fn station_stats(table: &TripTable) -> StationStats {
    let starts = table.column(columns::START_STATION).map(sanitize);
    let ends = table.column(columns::END_STATION).map(sanitize);

    let most_common_trip = match (&starts, &ends) {
        (Some(starts), Some(ends)) => {
            let trips = starts
                .iter()
                .zip(ends)
                .filter_map(|(s, e)| Some(format!("{} -> {}", (*s)?, (*e)?)));
            Some(modes(trips))
        }
        _ => None,
    };

    StationStats {
        most_common_start_station: starts.as_deref().map(station_modes),
        most_common_end_station: ends.as_deref().map(station_modes),
        most_common_trip,
    }
}

/// Row-aligned clean values; `None` marks an excluded cell.
fn sanitize(raw: &[RawValue]) -> Vec<Option<&str>> {
    let cleaned: Vec<Option<&str>> = raw.iter().map(as_station).collect();
    debug!(
        kept = cleaned.iter().flatten().count(),
        total = raw.len(),
        "Station column sanitized"
    );
    cleaned
}

fn station_modes(cleaned: &[Option<&str>]) -> Vec<String> {
    modes(cleaned.iter().flatten().copied())
        .into_iter()
        .map(str::to_string)
        .collect()
}
