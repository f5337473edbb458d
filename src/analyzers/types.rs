//! Result types produced by the aggregators.
//!
//! Field names serialize to the camelCase metric keys consumers expect
//! (`mostCommonMonth`, `totalTravelTime`, ...).

use serde::Serialize;
use std::collections::BTreeMap;

/// Most frequent travel times. Every list holds the full tie set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeStats {
    pub most_common_month: Vec<String>,
    pub most_common_day: Vec<String>,
    pub most_common_start_hour: Vec<u32>,
}

/// Most popular stations and trip. A field is `None` when its source
/// column is absent, and is then left out of the serialized mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_start_station: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_end_station: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_common_trip: Option<Vec<String>>,
}

impl StationStats {
    pub fn is_empty(&self) -> bool {
        self.most_common_start_station.is_none()
            && self.most_common_end_station.is_none()
            && self.most_common_trip.is_none()
    }
}

/// Total and mean trip duration, in the unit of the source column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStats {
    pub total_travel_time: f64,
    /// `None` when no duration survived cleaning.
    pub average_travel_time: Option<f64>,
}

/// User demographics. All three keys are always serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub user_type_counts: BTreeMap<String, usize>,
    pub gender_counts: BTreeMap<String, usize>,
    pub earliest_year_of_birth: Option<i64>,
}
