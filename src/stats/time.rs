// src/stats/time.rs

use super::{footer, mode, NO_DATA};
use crate::filters::{DAY_NAMES, MONTH_NAMES};
use crate::load::TripTable;
use anyhow::Result;
use std::io::Write;
use std::time::Instant;

/// Most frequent travel times: mode of derived month, weekday and start hour.
pub fn report(table: &TripTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{}", NO_DATA)?;
        return footer(out, started);
    }

    if let Some((month, _)) = mode(table.trips.iter().map(|t| t.month)) {
        writeln!(
            out,
            "Most Popular month: {}",
            MONTH_NAMES[(month - 1) as usize]
        )?;
    }
    if let Some((weekday, _)) = mode(table.trips.iter().map(|t| t.weekday)) {
        writeln!(
            out,
            "Most Popular day of week: {}",
            DAY_NAMES[weekday as usize]
        )?;
    }
    if let Some((hour, _)) = mode(table.trips.iter().map(|t| t.hour)) {
        writeln!(out, "Most Popular hour: {}", hour)?;
    }

    footer(out, started)
}
