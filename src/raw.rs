// src/raw.rs

use crate::config::{City, CityData};
use anyhow::{Context, Result};
use csv::StringRecord;
use rand::seq::index;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

/// Rows shown per "yes" answer, matching the original tool.
const SAMPLE_ROWS: usize = 5;

/// Interactive raw-data loop. Reloads the city's full, unfiltered CSV and
/// shows five randomly sampled rows per "yes" answer. The sampling is
/// unseeded: rows are distinct within one answer but may repeat across
/// answers. Exact "no" (case-insensitive) ends the loop; any other non-"yes"
/// answer falls through and the question is asked again.
pub fn view_raw(
    config: &CityData,
    city: City,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let path = config.path(city);
    let mut rdr = csv::Reader::from_path(&path)
        .with_context(|| format!("failed to open dataset {}", path.display()))?;
    let headers = rdr
        .headers()
        .with_context(|| format!("failed to read CSV header of {}", path.display()))?
        .clone();
    let rows: Vec<StringRecord> = rdr
        .records()
        .collect::<Result<_, _>>()
        .with_context(|| format!("CSV parse error in {}", path.display()))?;
    debug!(city = city.name(), rows = rows.len(), "raw dataset reloaded");

    let mut rng = rand::rng();
    let mut line = String::new();
    loop {
        writeln!(out, "\nWould you like to see raw data? Enter yes or no.")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            // input closed; nothing more to show
            break;
        }
        let answer = line.trim();
        if answer.eq_ignore_ascii_case("no") {
            break;
        }
        if answer.eq_ignore_ascii_case("yes") {
            show_sample(&headers, &rows, &mut rng, out)?;
        }
    }
    Ok(())
}

fn show_sample(
    headers: &StringRecord,
    rows: &[StringRecord],
    rng: &mut impl Rng,
    out: &mut impl Write,
) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "The dataset has no rows to show.")?;
        return Ok(());
    }
    let take = SAMPLE_ROWS.min(rows.len());
    writeln!(out, "{}", format_record(headers))?;
    for idx in index::sample(rng, rows.len(), take) {
        writeln!(out, "{}", format_record(&rows[idx]))?;
    }
    Ok(())
}

fn format_record(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(" | ")
}
