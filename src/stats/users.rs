// src/stats/users.rs

use super::{footer, mode, value_counts, NO_DATA};
use crate::load::TripTable;
use anyhow::Result;
use std::io::Write;
use std::time::Instant;

/// User demographics: user-type counts, gender counts and birth-year range.
/// Gender and birth year are reported only when the source CSV carried the
/// column; availability comes from the table's schema flags, not from any
/// per-city configuration.
pub fn report(table: &TripTable, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    let types = value_counts(table.trips.iter().map(|t| t.user_type.as_str()));
    if types.is_empty() {
        writeln!(out, "{}", NO_DATA)?;
    } else {
        writeln!(out, "Counts of user types:")?;
        for (user_type, count) in types {
            writeln!(out, "  {}: {}", user_type, count)?;
        }
    }

    if table.has_gender {
        let genders = value_counts(table.trips.iter().filter_map(|t| t.gender.as_deref()));
        writeln!(out, "Counts of gender:")?;
        for (gender, count) in genders {
            writeln!(out, "  {}: {}", gender, count)?;
        }
    } else {
        writeln!(out, "There is no gender data available.")?;
    }

    if table.has_birth_year {
        let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
        match (years.iter().min(), years.iter().max(), mode(years.iter())) {
            (Some(earliest), Some(recent), Some((common, _))) => {
                writeln!(
                    out,
                    "The earliest year of birth for bikeshare users is: {}",
                    earliest
                )?;
                writeln!(
                    out,
                    "The most recent year of birth for bikeshare users is: {}",
                    recent
                )?;
                writeln!(
                    out,
                    "The most common year of birth for bikeshare users is: {}",
                    common
                )?;
            }
            _ => writeln!(out, "No birth year values in the selected rows.")?,
        }
    } else {
        writeln!(out, "There is no birth year data available.")?;
    }

    footer(out, started)
}
