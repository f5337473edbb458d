use serde::Serialize;

use crate::analyzers::types::{DurationStats, StationStats, TimeStats, UserStats};
use crate::analyzers::{duration_stats, station_stats, time_stats, user_stats};
use crate::config::Vocabulary;
use crate::table::TripTable;

/// All four trip summaries for one table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripReport {
    pub source: Option<String>,
    pub rows: usize,
    /// `None` when the table has no `start_time` column; the key is then
    /// left out, like the station keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeStats>,
    pub station: StationStats,
    /// `None` when the table has no `trip_duration` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationStats>,
    pub user: UserStats,
}

impl TripReport {
    pub fn from_table(table: &TripTable, vocabulary: &Vocabulary) -> Self {
        TripReport {
            source: None,
            rows: table.row_count(),
            time: time_stats(table),
            station: station_stats(table),
            duration: duration_stats(table),
            user: user_stats(table, vocabulary),
        }
    }

    /// Set the label of the data set the report was built from
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{RawValue, columns};

    #[test]
    fn test_from_table_empty() {
        let report = TripReport::from_table(&TripTable::new(), &Vocabulary::default());

        assert_eq!(report.rows, 0);
        assert_eq!(report.time, None);
        assert!(report.station.is_empty());
        assert_eq!(report.duration, None);
        assert_eq!(report.user, UserStats::default());
    }

    #[test]
    fn test_from_table_with_columns() {
        let table = TripTable::from_columns([
            (
                columns::START_TIME,
                vec![
                    RawValue::from("2017-06-23 15:09:32"),
                    "2017-06-24 15:10:00".into(),
                ],
            ),
            (columns::TRIP_DURATION, vec![RawValue::from("60"), "120".into()]),
            (columns::USER_TYPE, vec![RawValue::from("Customer"), "Subscriber".into()]),
        ])
        .unwrap();

        let report = TripReport::from_table(&table, &Vocabulary::default()).with_source("test");

        assert_eq!(report.source.as_deref(), Some("test"));
        assert_eq!(report.rows, 2);
        assert_eq!(report.time.unwrap().most_common_month, vec!["june"]);
        assert!(report.station.is_empty());
        assert_eq!(report.duration.unwrap().total_travel_time, 180.0);
        assert_eq!(report.user.user_type_counts.len(), 2);
    }

    #[test]
    fn test_serialized_keys() {
        let report = TripReport::from_table(&TripTable::new(), &Vocabulary::default());
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("time").is_none());
        assert!(json.get("duration").is_none());
        assert_eq!(json["station"], serde_json::json!({}));
        assert_eq!(
            json["user"],
            serde_json::json!({
                "userTypeCounts": {},
                "genderCounts": {},
                "earliestYearOfBirth": null
            })
        );
    }
}
