//! Column-oriented trip table and the raw cell values it holds.
//!
//! The table is built once by a loader and then only read. Cells keep
//! whatever the source handed over; typing happens later, per column, in
//! [`crate::analyzers::sanitize`].

use anyhow::{Result, ensure};
use chrono::NaiveDateTime;

/// Recognized column names. Every one of them is optional in a table.
pub mod columns {
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
    pub const TRIP_DURATION: &str = "trip_duration";
    pub const START_STATION: &str = "start_station";
    pub const END_STATION: &str = "end_station";
    pub const USER_TYPE: &str = "user_type";
    pub const GENDER: &str = "gender";
    pub const BIRTH_YEAR: &str = "birth_year";
}

/// An untyped cell as it came out of the source.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Missing,
    Text(String),
    Number(f64),
    Timestamp(NaiveDateTime),
    /// Anything else (maps, lists, ...). Only a rendering is kept.
    Other(String),
}

impl RawValue {
    /// True for `Missing`, NaN numbers and blank text.
    pub fn is_missing(&self) -> bool {
        match self {
            RawValue::Missing => true,
            RawValue::Number(n) => n.is_nan(),
            RawValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Number(f64::from(n))
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(ts: NaiveDateTime) -> Self {
        RawValue::Timestamp(ts)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(RawValue::Missing, Into::into)
    }
}

/// Ordered trip records stored column by column.
///
/// All columns have the same length and names are unique; both are
/// checked on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    columns: Vec<(String, Vec<RawValue>)>,
    row_count: usize,
}

impl TripTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, failing if its length disagrees with the existing
    /// columns or the name is already taken.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = RawValue>,
    ) -> Result<Self> {
        let name = name.into();
        let values: Vec<RawValue> = values.into_iter().collect();

        ensure!(!self.has_column(&name), "duplicate column `{}`", name);
        if !self.columns.is_empty() {
            ensure!(
                values.len() == self.row_count,
                "column `{}` has {} values, table has {} rows",
                name,
                values.len(),
                self.row_count
            );
        }

        self.row_count = values.len();
        self.columns.push((name, values));
        Ok(self)
    }

    pub fn from_columns<N, I>(columns: impl IntoIterator<Item = (N, I)>) -> Result<Self>
    where
        N: Into<String>,
        I: IntoIterator<Item = RawValue>,
    {
        columns
            .into_iter()
            .try_fold(Self::new(), |table, (name, values)| {
                table.with_column(name, values)
            })
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Values of `name`, aligned by row.
    pub fn column(&self, name: &str) -> Option<&[RawValue]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Builds a new table holding the given rows, in the given order.
    /// Indices past the end are skipped.
    pub fn select_rows(&self, indices: &[usize]) -> TripTable {
        let indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.row_count)
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|(name, values)| {
                let picked = indices.iter().map(|&i| values[i].clone()).collect();
                (name.clone(), picked)
            })
            .collect();

        TripTable {
            columns,
            row_count: indices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<RawValue> {
        values.iter().map(|&v| RawValue::from(v)).collect()
    }

    #[test]
    fn test_empty_table() {
        let table = TripTable::new();
        assert_eq!(table.row_count(), 0);
        assert!(!table.has_column(columns::START_TIME));
        assert!(table.column(columns::START_TIME).is_none());
    }

    #[test]
    fn test_with_column_sets_row_count() {
        let table = TripTable::new()
            .with_column(columns::GENDER, text(&["Male", "Female"]))
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert!(table.has_column(columns::GENDER));
        assert_eq!(table.column(columns::GENDER).unwrap().len(), 2);
    }

    #[test]
    fn test_mismatched_column_length_is_rejected() {
        let result = TripTable::new()
            .with_column(columns::GENDER, text(&["Male", "Female"]))
            .unwrap()
            .with_column(columns::USER_TYPE, text(&["Customer"]));

        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_column_is_rejected() {
        let result = TripTable::from_columns([
            (columns::GENDER, text(&["Male"])),
            (columns::GENDER, text(&["Female"])),
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_select_rows_keeps_order_and_source() {
        let table = TripTable::from_columns([
            (columns::START_STATION, text(&["A", "B", "C"])),
            (columns::END_STATION, text(&["X", "Y", "Z"])),
        ])
        .unwrap();

        let picked = table.select_rows(&[2, 0, 7]);

        assert_eq!(picked.row_count(), 2);
        assert_eq!(
            picked.column(columns::START_STATION).unwrap(),
            text(&["C", "A"]).as_slice()
        );
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn test_is_missing() {
        assert!(RawValue::Missing.is_missing());
        assert!(RawValue::Number(f64::NAN).is_missing());
        assert!(RawValue::from("  ").is_missing());
        assert!(RawValue::from(None::<&str>).is_missing());
        assert!(!RawValue::from(0).is_missing());
        assert!(!RawValue::Other("{1: 2}".into()).is_missing());
    }
}
