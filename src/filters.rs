// src/filters.rs

use crate::config::City;

/// Ordered month names, index = month number - 1. The prompt only accepts the
/// first six (the datasets cover January through June), but derived month
/// numbers can reach December and rendering must cover them all.
pub static MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Ordered day names, index = weekday number (Monday = 0).
pub static DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Day codes accepted at the prompt, same order as `DAY_NAMES`.
pub static DAY_CODES: [&str; 7] = ["M", "Tu", "W", "Th", "F", "Sa", "Su"];

/// How many months the prompt accepts.
const PROMPT_MONTHS: usize = 6;

/// Month restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number; only 1..=6 is constructible via `parse`.
    Only(u32),
}

impl MonthFilter {
    /// Parse user input case-insensitively: a month name January..June, or
    /// "all" for no restriction.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .take(PROMPT_MONTHS)
            .position(|name| name.eq_ignore_ascii_case(trimmed))
            .map(|idx| MonthFilter::Only(idx as u32 + 1))
    }

    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => month == m,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Only(m) => MONTH_NAMES[(m - 1) as usize],
        }
    }
}

/// Weekday restriction chosen at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    /// 0-based weekday number, Monday = 0.
    Only(u32),
}

impl DayFilter {
    /// Parse a day code. Unlike city and month, the codes are matched
    /// case-sensitively ("Tu" is valid, "tu" is not) and so is "all" — the
    /// original tool never lowercased this prompt, and we keep that behavior.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed == "all" {
            return Some(DayFilter::All);
        }
        DAY_CODES
            .iter()
            .position(|code| *code == trimmed)
            .map(|idx| DayFilter::Only(idx as u32))
    }

    pub fn matches(self, weekday: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => weekday == d,
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Only(d) => DAY_NAMES[d as usize],
        }
    }
}

/// Validated prompt triple, immutable once returned by the prompter and
/// consumed once by the loader.
#[derive(Debug, Clone, Copy)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_parse_accepts_names_and_all() {
        assert_eq!(MonthFilter::parse("january"), Some(MonthFilter::Only(1)));
        assert_eq!(MonthFilter::parse("June"), Some(MonthFilter::Only(6)));
        assert_eq!(MonthFilter::parse("ALL"), Some(MonthFilter::All));
        // the datasets stop at June, so later months are not selectable
        assert_eq!(MonthFilter::parse("july"), None);
        assert_eq!(MonthFilter::parse("6"), None);
    }

    #[test]
    fn day_parse_is_case_sensitive() {
        assert_eq!(DayFilter::parse("M"), Some(DayFilter::Only(0)));
        assert_eq!(DayFilter::parse("Tu"), Some(DayFilter::Only(1)));
        assert_eq!(DayFilter::parse("Su"), Some(DayFilter::Only(6)));
        assert_eq!(DayFilter::parse("tu"), None);
        assert_eq!(DayFilter::parse("TU"), None);
        assert_eq!(DayFilter::parse("all"), Some(DayFilter::All));
        assert_eq!(DayFilter::parse("All"), None);
    }

    #[test]
    fn filters_match_derived_numbers() {
        assert!(MonthFilter::All.matches(12));
        assert!(MonthFilter::Only(3).matches(3));
        assert!(!MonthFilter::Only(3).matches(4));
        assert!(DayFilter::All.matches(6));
        assert!(DayFilter::Only(0).matches(0));
        assert!(!DayFilter::Only(0).matches(5));
    }

    #[test]
    fn describe_names_the_selection() {
        assert_eq!(MonthFilter::Only(2).describe(), "February");
        assert_eq!(MonthFilter::All.describe(), "all");
        assert_eq!(DayFilter::Only(5).describe(), "Saturday");
        assert_eq!(DayFilter::All.describe(), "all");
    }
}
