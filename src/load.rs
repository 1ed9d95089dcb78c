// src/load.rs

use crate::config::{City, CityData};
use crate::filters::{DayFilter, MonthFilter};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Timestamp layout used by all three city CSVs.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One trip row as it appears on disk. The optional columns are absent
/// entirely in some cities, so they default to `None` rather than failing
/// deserialization; the leading unnamed index column is simply ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// A parsed trip with the three derived temporal columns.
#[derive(Debug, Clone)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    /// Stored as a float in the source CSVs ("1992.0"), reported as an integer.
    pub birth_year: Option<i32>,
    /// Derived from `start_time`: 1 = January .. 12 = December.
    pub month: u32,
    /// Derived from `start_time`: 0 = Monday .. 6 = Sunday.
    pub weekday: u32,
    /// Derived from `start_time`: 0..=23.
    pub hour: u32,
}

/// In-memory working set for one session iteration. The schema flags record
/// whether the source CSV carried the optional columns at all; the user
/// reporter consults them instead of any per-city configuration.
#[derive(Debug)]
pub struct TripTable {
    pub trips: Vec<Trip>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

fn parse_time(raw: &str, column: &str, path: &Path, row: usize) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIME_FORMAT).with_context(|| {
        format!(
            "bad {} value {:?} in {} at data row {}",
            column,
            raw,
            path.display(),
            row
        )
    })
}

/// Read a city's full dataset into memory and derive month, weekday and start
/// hour for every row. The file is opened read-only and never cached; each
/// call re-reads from disk.
pub fn load_city(config: &CityData, city: City) -> Result<TripTable> {
    let path = config.path(city);
    let file =
        File::open(&path).with_context(|| format!("failed to open dataset {}", path.display()))?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr
        .headers()
        .with_context(|| format!("failed to read CSV header of {}", path.display()))?;
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut trips = Vec::new();
    for (idx, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result
            .with_context(|| format!("CSV parse error in {} at data row {}", path.display(), idx))?;
        let start_time = parse_time(&raw.start_time, "Start Time", &path, idx)?;
        let end_time = parse_time(&raw.end_time, "End Time", &path, idx)?;
        trips.push(Trip {
            month: start_time.month(),
            weekday: start_time.weekday().num_days_from_monday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type,
            gender: raw.gender,
            birth_year: raw.birth_year.map(|y| y as i32),
        });
    }

    debug!(city = city.name(), rows = trips.len(), "loaded dataset");
    Ok(TripTable {
        trips,
        has_gender,
        has_birth_year,
    })
}

/// Load a city's dataset and keep only rows matching the month/day filter.
/// An empty result is valid; the reporters guard for it.
pub fn load_filtered(
    config: &CityData,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<TripTable> {
    let mut table = load_city(config, city)?;
    let total = table.len();
    table
        .trips
        .retain(|t| month.matches(t.month) && day.matches(t.weekday));
    info!(
        city = city.name(),
        total,
        kept = table.len(),
        "filtered dataset ready"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs;
    use tempfile::TempDir;

    // 2017-01-02 and 2017-06-05 are Mondays, 2017-06-06 a Tuesday,
    // 2017-03-18 a Saturday.
    const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:00:00,2017-01-02 08:30:00,1800,Clark St,State St,Subscriber,Male,1984.0
1,2017-06-05 09:15:00,2017-06-05 09:20:00,300,State St,Clark St,Customer,Female,1992.0
2,2017-06-06 17:45:00,2017-06-06 18:00:00,900,Clark St,Canal St,Subscriber,,
3,2017-03-18 12:00:00,2017-03-18 12:30:00,1800,Canal St,Canal St,Subscriber,Male,1992.0
";

    const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-02-14 07:05:00,2017-02-14 07:25:00,1200,14th St,K St,Subscriber
";

    fn fixture() -> Result<(TempDir, CityData)> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("chicago.csv"), CHICAGO_CSV)?;
        fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV)?;
        let config = CityData::new(dir.path());
        Ok((dir, config))
    }

    #[test]
    fn derives_month_weekday_hour() -> Result<()> {
        let (_dir, config) = fixture()?;
        let table = load_city(&config, City::Chicago)?;
        assert_eq!(table.len(), 4);
        assert!(table.has_gender);
        assert!(table.has_birth_year);

        let first = &table.trips[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.weekday, 0); // Monday
        assert_eq!(first.hour, 8);
        assert_eq!(first.birth_year, Some(1984));

        let saturday = &table.trips[3];
        assert_eq!(saturday.weekday, 5);
        Ok(())
    }

    #[test]
    fn missing_optional_columns_load_as_none() -> Result<()> {
        let (_dir, config) = fixture()?;
        let table = load_city(&config, City::Washington)?;
        assert!(!table.has_gender);
        assert!(!table.has_birth_year);
        assert_eq!(table.trips[0].gender, None);
        assert_eq!(table.trips[0].birth_year, None);
        Ok(())
    }

    #[test]
    fn all_all_equals_full_dataset() -> Result<()> {
        let (_dir, config) = fixture()?;
        let full = load_city(&config, City::Chicago)?;
        let filtered = load_filtered(&config, City::Chicago, MonthFilter::All, DayFilter::All)?;
        assert_eq!(filtered.len(), full.len());
        Ok(())
    }

    #[test]
    fn month_filter_keeps_only_that_month() -> Result<()> {
        let (_dir, config) = fixture()?;
        let june = load_filtered(&config, City::Chicago, MonthFilter::Only(6), DayFilter::All)?;
        assert_eq!(june.len(), 2);
        assert!(june.trips.iter().all(|t| t.month == 6));
        Ok(())
    }

    #[test]
    fn day_filter_keeps_only_that_weekday() -> Result<()> {
        let (_dir, config) = fixture()?;
        let tuesday = load_filtered(&config, City::Chicago, MonthFilter::All, DayFilter::Only(1))?;
        assert_eq!(tuesday.len(), 1);
        assert!(tuesday.trips.iter().all(|t| t.weekday == 1));
        Ok(())
    }

    #[test]
    fn filtered_count_never_exceeds_full_count() -> Result<()> {
        let (_dir, config) = fixture()?;
        let full = load_city(&config, City::Chicago)?.len();
        let mut months = vec![MonthFilter::All];
        months.extend((1..=6).map(MonthFilter::Only));
        let mut days = vec![DayFilter::All];
        days.extend((0..7).map(DayFilter::Only));
        for &month in &months {
            for &day in &days {
                let filtered = load_filtered(&config, City::Chicago, month, day)?;
                assert!(filtered.len() <= full);
                for t in &filtered.trips {
                    assert!(month.matches(t.month));
                    assert!(day.matches(t.weekday));
                }
            }
        }
        Ok(())
    }

    #[test]
    fn empty_result_is_valid() -> Result<()> {
        let (_dir, config) = fixture()?;
        // nothing in the fixture falls in February
        let table = load_filtered(&config, City::Chicago, MonthFilter::Only(2), DayFilter::All)?;
        assert!(table.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file_is_fatal() -> Result<()> {
        let dir = TempDir::new()?;
        let config = CityData::new(dir.path());
        assert!(load_city(&config, City::Chicago).is_err());
        Ok(())
    }
}
