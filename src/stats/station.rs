// src/stats/station.rs

use super::{footer, mode, NO_DATA};
use crate::load::TripTable;
use anyhow::Result;
use std::io::Write;
use std::time::Instant;

/// Most popular start station, end station and (start, end) combination,
/// each with its trip count. Three independent aggregations over the same
/// table; ties break toward the value encountered first.
pub fn report(table: &TripTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    if table.is_empty() {
        writeln!(out, "{}", NO_DATA)?;
        return footer(out, started);
    }

    if let Some((station, count)) = mode(table.trips.iter().map(|t| t.start_station.as_str())) {
        writeln!(out, "Most Popular start station: {}", station)?;
        writeln!(
            out,
            "Count of trips starting from the most popular start station: {}",
            count
        )?;
    }
    if let Some((station, count)) = mode(table.trips.iter().map(|t| t.end_station.as_str())) {
        writeln!(out, "Most Popular end station: {}", station)?;
        writeln!(
            out,
            "Count of trips ending in the most popular station: {}",
            count
        )?;
    }
    if let Some(((start, end), count)) = mode(
        table
            .trips
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    ) {
        writeln!(
            out,
            "The most popular trip is from {} to {} ({} trips).",
            start, end, count
        )?;
    }

    footer(out, started)
}
