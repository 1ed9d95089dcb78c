// src/session.rs

use crate::config::CityData;
use crate::load;
use crate::prompt::Prompter;
use crate::raw;
use crate::stats;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// The full interactive loop: prompt, load-and-filter, the four reports in
/// fixed order, the raw-data viewer, then the restart question. Nothing
/// carries across iterations; every pass reloads from disk.
pub fn run(config: &CityData, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;
    loop {
        let selection = Prompter::new(&mut *input, &mut *out).filters()?;
        info!(
            city = selection.city.name(),
            month = selection.month.describe(),
            day = selection.day.describe(),
            "filters selected"
        );

        let table = load::load_filtered(config, selection.city, selection.month, selection.day)?;
        stats::time::report(&table, out)?;
        stats::station::report(&table, out)?;
        stats::duration::report(&table, out)?;
        stats::users::report(&table, out)?;
        raw::view_raw(config, selection.city, input, out)?;

        let again = Prompter::new(&mut *input, &mut *out)
            .confirm("\nWould you like to restart? Enter yes or no.")?;
        if !again {
            break;
        }
    }
    info!("session over");
    Ok(())
}
