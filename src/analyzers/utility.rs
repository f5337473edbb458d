use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Every value sharing the highest frequency, sorted ascending.
/// Returns an empty vector for empty input.
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Eq + Hash + Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts: HashMap<T, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }

    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };

    let mut winners: Vec<T> = counts
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(v, _)| v)
        .collect();
    winners.sort();
    winners
}

/// Occurrence count per distinct value.
pub fn value_counts<'a, I>(values: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v.to_string()).or_default() += 1;
    }
    counts
}
