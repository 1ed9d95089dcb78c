// src/stats/duration.rs

use super::footer;
use crate::load::TripTable;
use anyhow::Result;
use chrono::Duration;
use std::io::Write;
use std::time::Instant;

/// Render a duration as days/hours/minutes/seconds.
pub fn human_duration(d: Duration) -> String {
    let total = d.num_seconds();
    let (sign, total) = if total < 0 { ("-", -total) } else { ("", total) };
    let days = total / 86_400;
    let hours = total % 86_400 / 3_600;
    let minutes = total % 3_600 / 60;
    let seconds = total % 60;
    format!(
        "{}{} days {} hours {} minutes {} seconds",
        sign, days, hours, minutes, seconds
    )
}

/// Sum of the elapsed time per trip over the whole table. Zero for an empty
/// table.
pub fn total_travel_time(table: &TripTable) -> Duration {
    table
        .trips
        .iter()
        .fold(Duration::zero(), |acc, t| acc + (t.end_time - t.start_time))
}

/// Total and average trip duration over the filtered table. The average of
/// an empty table is undefined and reported as such.
pub fn report(table: &TripTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let total = total_travel_time(table);
    writeln!(
        out,
        "Total travel time for this period: {}",
        human_duration(total)
    )?;

    if table.is_empty() {
        writeln!(out, "Average travel time for this period: no data")?;
    } else {
        let mean = total / table.len() as i32;
        writeln!(
            out,
            "Average travel time for this period: {}",
            human_duration(mean)
        )?;
    }

    footer(out, started)
}
