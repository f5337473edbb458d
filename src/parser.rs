//! CSV loader for bikeshare trip exports.

use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::table::{RawValue, TripTable};

/// Cities with a published trip data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

/// Maps a CSV header such as `Start Time` onto the column vocabulary
/// (`start_time`).
pub fn normalize_column_name(header: &str) -> String {
    header
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Reads a headed CSV into a [`TripTable`].
///
/// Cells pass through as [`RawValue::Text`]; empty cells become
/// [`RawValue::Missing`]. No other cleaning happens here.
///
/// # Errors
///
/// Returns an error on unreadable input, ragged rows or duplicate
/// column names.
pub fn parse_trips<R: Read>(reader: R) -> Result<TripTable> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(normalize_column_name)
        .collect();

    let mut columns: Vec<Vec<RawValue>> = vec![Vec::new(); headers.len()];

    for (line, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("reading CSV record {}", line + 1))?;
        ensure!(
            record.len() == headers.len(),
            "CSV record {} has {} fields, expected {}",
            line + 1,
            record.len(),
            headers.len()
        );

        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.push(if field.is_empty() {
                RawValue::Missing
            } else {
                RawValue::Text(field.to_string())
            });
        }
    }

    let table = TripTable::from_columns(headers.into_iter().zip(columns))?;
    debug!(
        rows = table.row_count(),
        columns = ?table.column_names().collect::<Vec<_>>(),
        "CSV parsed"
    );
    Ok(table)
}

/// Opens `path` and parses it with [`parse_trips`].
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_trips(path: impl AsRef<Path>) -> Result<TripTable> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let table = parse_trips(file).with_context(|| format!("loading {}", path.display()))?;
    info!(rows = table.row_count(), "Trip data loaded");
    Ok(table)
}

/// Loads the data set of `city` from `data_dir`.
pub fn load_city(data_dir: impl AsRef<Path>, city: City) -> Result<TripTable> {
    load_trips(data_dir.as_ref().join(city.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::columns;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("Start Time"), columns::START_TIME);
        assert_eq!(normalize_column_name(" Trip Duration "), columns::TRIP_DURATION);
        assert_eq!(normalize_column_name("Birth-Year"), columns::BIRTH_YEAR);
        assert_eq!(normalize_column_name("gender"), columns::GENDER);
    }

    #[test]
    fn test_parse_trips_passes_cells_through() {
        let csv = "Start Time,Trip Duration,Gender\n\
                   2017-01-01 09:07:57,321,Male\n\
                   2017-01-02 10:00:00,,Unicorn\n";

        let table = parse_trips(csv.as_bytes()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column(columns::TRIP_DURATION).unwrap(),
            &[RawValue::from("321"), RawValue::Missing]
        );
        assert_eq!(
            table.column(columns::GENDER).unwrap(),
            &[RawValue::from("Male"), RawValue::from("Unicorn")]
        );
    }

    #[test]
    fn test_parse_trips_header_only() {
        let table = parse_trips("Start Station,End Station\n".as_bytes()).unwrap();

        assert_eq!(table.row_count(), 0);
        assert!(table.has_column(columns::START_STATION));
        assert!(table.has_column(columns::END_STATION));
    }

    #[test]
    fn test_parse_trips_ragged_rows() {
        let csv = "Gender,Birth Year\nMale,1980\nFemale\n";
        assert!(parse_trips(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_trips_duplicate_columns() {
        let csv = "Gender,gender\nMale,Female\n";
        assert!(parse_trips(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_city_file_names() {
        assert_eq!(City::Chicago.file_name(), "chicago.csv");
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
        assert_eq!(City::Washington.file_name(), "washington.csv");
    }

    #[test]
    fn test_load_city_missing_file() {
        assert!(load_city("/nonexistent", City::Chicago).is_err());
    }
}
