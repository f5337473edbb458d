use std::collections::BTreeMap;
use tracing::debug;

use crate::analyzers::sanitize::{as_category, as_number};
use crate::analyzers::types::UserStats;
use crate::analyzers::utility::value_counts;
use crate::config::Vocabulary;
use crate::table::{TripTable, columns};

/// User type counts, gender counts and earliest birth year.
///
/// Unlike the other aggregators this always yields every metric: a
/// missing column gives an empty count map or `None` for that metric
/// only.
#[tracing::instrument(skip_all, fields(rows = table.row_count()))]
pub fn user_stats(table: &TripTable, vocabulary: &Vocabulary) -> UserStats {
    let user_type_counts = category_counts(table, columns::USER_TYPE, &vocabulary.user_types);
    let gender_counts = category_counts(table, columns::GENDER, &vocabulary.genders);

    let earliest_year_of_birth = table.column(columns::BIRTH_YEAR).and_then(|raw| {
        raw.iter()
            .filter_map(as_number)
            .min_by(f64::total_cmp)
            .map(|year| year.trunc() as i64)
    });

    debug!(
        user_types = user_type_counts.len(),
        genders = gender_counts.len(),
        ?earliest_year_of_birth,
        "User stats computed"
    );

    UserStats {
        user_type_counts,
        gender_counts,
        earliest_year_of_birth,
    }
}

fn category_counts(table: &TripTable, column: &str, allowed: &[String]) -> BTreeMap<String, usize> {
    table
        .column(column)
        .map(|raw| value_counts(raw.iter().filter_map(|v| as_category(v, allowed))))
        .unwrap_or_default()
}
