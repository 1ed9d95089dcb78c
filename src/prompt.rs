// src/prompt.rs

use crate::config::City;
use crate::filters::{DayFilter, FilterSelection, MonthFilter};
use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Interactive prompter over generic reader/writer pairs so the retry loops
/// can be driven by tests without a terminal. Validation lives in the parse
/// functions on `City`, `MonthFilter` and `DayFilter`; this type owns only
/// the ask-until-valid policy.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Collect a validated (city, month, day) triple, re-prompting on invalid
    /// input with no retry limit.
    pub fn filters(&mut self) -> Result<FilterSelection> {
        let city = self.ask(
            "Which city would you like to see data for: Chicago, New York City or Washington?",
            City::parse,
        )?;
        writeln!(
            self.output,
            "You will be reviewing data for {}.\nLet's start",
            city.name()
        )?;

        let month = self.ask(
            "Would you like to filter the data by month? Select January, February, March, April, May, June or all.",
            MonthFilter::parse,
        )?;
        writeln!(
            self.output,
            "You selected to review {} data.\n",
            month.describe()
        )?;

        let day = self.ask(
            "Would you like to filter the data by day? Please type M, Tu, W, Th, F, Sa, Su or all.",
            DayFilter::parse,
        )?;
        writeln!(self.output, "{}", "-".repeat(40))?;

        Ok(FilterSelection { city, month, day })
    }

    /// "yes"/"no" question: true only for exact "yes", case-insensitively.
    /// A closed input counts as "no".
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        if self
            .input
            .read_line(&mut line)
            .context("reading confirmation answer")?
            == 0
        {
            return Ok(false);
        }
        Ok(line.trim().eq_ignore_ascii_case("yes"))
    }

    /// Ask `question` until `parse` accepts the answer. The only structural
    /// error is the input channel closing.
    fn ask<T>(&mut self, question: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        loop {
            writeln!(self.output, "{}", question)?;
            self.output.flush()?;
            let mut line = String::new();
            if self
                .input
                .read_line(&mut line)
                .context("reading prompt answer")?
                == 0
            {
                bail!("input closed while waiting for an answer");
            }
            match parse(line.trim()) {
                Some(value) => return Ok(value),
                None => writeln!(self.output, "That's not a valid input, please try again\n")?,
            }
        }
    }
}
