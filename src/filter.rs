//! Month and weekday restriction of a trip table.

use anyhow::{Result, anyhow, bail};
use chrono::{Datelike, Month, Weekday};
use tracing::debug;

use crate::analyzers::sanitize::as_timestamp;
use crate::table::{TripTable, columns};

/// Keeps only trips starting in a given month and/or on a given weekday.
/// `None` means no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TripFilter {
    /// 1-based month number.
    pub month: Option<u32>,
    pub day: Option<Weekday>,
}

impl TripFilter {
    /// Parses month and day names. `"all"` disables that restriction;
    /// names are case insensitive and may be abbreviated to three letters.
    pub fn parse(month: &str, day: &str) -> Result<Self> {
        let month = if is_all(month) {
            None
        } else {
            let m: Month = month
                .trim()
                .parse()
                .map_err(|_| anyhow!("unknown month `{}`", month))?;
            Some(m.number_from_month())
        };

        let day = if is_all(day) {
            None
        } else {
            let d: Weekday = day
                .trim()
                .parse()
                .map_err(|_| anyhow!("unknown day of week `{}`", day))?;
            Some(d)
        };

        Ok(Self { month, day })
    }

    pub fn is_unrestricted(&self) -> bool {
        self.month.is_none() && self.day.is_none()
    }

    /// Returns the rows of `table` that pass the filter. Rows whose start
    /// time does not parse never pass a restriction.
    #[tracing::instrument(skip(table), fields(rows = table.row_count()))]
    pub fn apply(&self, table: &TripTable) -> Result<TripTable> {
        if self.is_unrestricted() {
            return Ok(table.clone());
        }

        let Some(start_times) = table.column(columns::START_TIME) else {
            bail!("cannot filter by month or day: table has no `start_time` column");
        };

        let keep: Vec<usize> = start_times
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| {
                let ts = as_timestamp(raw)?;
                let month_ok = self.month.is_none_or(|m| ts.month() == m);
                let day_ok = self.day.is_none_or(|d| ts.weekday() == d);
                (month_ok && day_ok).then_some(i)
            })
            .collect();

        debug!(kept = keep.len(), "Rows filtered");
        Ok(table.select_rows(&keep))
    }
}

fn is_all(s: &str) -> bool {
    s.trim().eq_ignore_ascii_case("all")
}
