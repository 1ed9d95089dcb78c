// src/stats/mod.rs

pub mod duration;
pub mod station;
pub mod time;
pub mod users;

use anyhow::Result;
use std::collections::HashMap;
use std::hash::Hash;
use std::io::Write;
use std::time::Instant;

/// Distinct values with their counts, most frequent first. Ties keep
/// first-encountered order, matching the tie-breaking of the reports.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    // value -> (count, index of first occurrence)
    let mut counts: HashMap<T, (usize, usize)> = HashMap::new();
    for (idx, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, idx)).0 += 1;
    }
    let mut out: Vec<(T, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first))| (value, count, first))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    out.into_iter().map(|(value, count, _)| (value, count)).collect()
}

/// Most frequent value and its count; ties go to the value seen first.
/// `None` on an empty iterator — the mode of nothing is undefined and every
/// caller guards for it.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    value_counts(values).into_iter().next()
}

/// Elapsed-seconds line plus the 40-dash separator every report ends with.
pub(crate) fn footer(out: &mut impl Write, started: Instant) -> Result<()> {
    writeln!(out, "\nThis took {:.4} seconds.", started.elapsed().as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(40))?;
    Ok(())
}

pub(crate) const NO_DATA: &str = "No trips match the selected filters.";
