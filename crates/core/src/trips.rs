//! Trip records and the in-memory table they are analysed in.

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

use crate::criteria::{month_of, City, DayFilter, FilterCriteria, MonthFilter};

/// Header names of the columns the loader understands.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    pub const REQUIRED: [&str; 5] = [
        START_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}

/// One CSV row as it appears on disk. Timestamps are kept as text until the
/// loader parses them, so a bad value can be reported with its line number.
#[derive(Deserialize, Debug, Clone)]
pub struct RawTripRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl TripRecord {
    #[must_use]
    pub fn new(
        start_time: NaiveDateTime,
        duration_seconds: f64,
        start_station: &str,
        end_station: &str,
    ) -> Self {
        Self {
            start_time,
            end_time: None,
            duration_seconds,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }
}

/// A trip record together with the fields derived from its start time.
///
/// The derived fields can only be produced from the record itself, so they
/// always agree with `start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    record: TripRecord,
    month: Month,
    weekday: Weekday,
    hour: u32,
}

impl Trip {
    #[must_use]
    pub fn record(&self) -> &TripRecord {
        &self.record
    }

    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

impl From<TripRecord> for Trip {
    fn from(record: TripRecord) -> Self {
        let start_time = record.start_time;

        Self {
            month: month_of(start_time.month0()),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            record,
        }
    }
}

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnPresence {
    pub gender: bool,
    pub birth_year: bool,
}

/// The trips of one city, possibly restricted by month and weekday.
#[derive(Debug, Clone)]
pub struct TripTable {
    city: City,
    columns: ColumnPresence,
    trips: Vec<Trip>,
}

impl TripTable {
    #[must_use]
    pub fn new(city: City, columns: ColumnPresence, trips: Vec<Trip>) -> Self {
        Self {
            city,
            columns,
            trips,
        }
    }

    #[must_use]
    pub fn city(&self) -> City {
        self.city
    }

    #[must_use]
    pub fn columns(&self) -> ColumnPresence {
        self.columns
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Returns a new table holding only the trips that match both filters.
    #[must_use]
    pub fn filtered(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        let trips = self
            .trips
            .iter()
            .filter(|trip| month.matches(trip.month()) && day.matches(trip.weekday()))
            .cloned()
            .collect();

        TripTable::new(self.city, self.columns, trips)
    }

    #[must_use]
    pub fn filtered_by(&self, criteria: &FilterCriteria) -> TripTable {
        self.filtered(criteria.month, criteria.day)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;

    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, 15, 0))
            .unwrap()
    }

    pub fn trip(start_time: NaiveDateTime, from: &str, to: &str, seconds: f64) -> Trip {
        Trip::from(TripRecord::new(start_time, seconds, from, to))
    }

    pub fn table(trips: Vec<Trip>) -> TripTable {
        TripTable::new(City::Chicago, ColumnPresence::default(), trips)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_derived_fields_follow_start_time() {
        // 2017-03-07 was a Tuesday
        let trip = trip(at(2017, 3, 7, 17), "A", "B", 60.0);
        assert_eq!(trip.month(), Month::March);
        assert_eq!(trip.weekday(), Weekday::Tue);
        assert_eq!(trip.hour(), 17);
    }

    #[test]
    fn test_filtered_keeps_matching_rows_only() {
        let table = table(vec![
            trip(at(2017, 3, 7, 8), "A", "B", 60.0),
            trip(at(2017, 3, 8, 9), "A", "C", 60.0),
            trip(at(2017, 4, 4, 10), "B", "C", 60.0),
        ]);

        let march = table.filtered(MonthFilter::Only(Month::March), DayFilter::All);
        assert_eq!(march.len(), 2);
        assert!(march.trips().iter().all(|t| t.month() == Month::March));

        let tuesdays = table.filtered(MonthFilter::All, DayFilter::Only(Weekday::Tue));
        assert_eq!(tuesdays.len(), 2);

        let march_tuesdays =
            table.filtered(MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Tue));
        assert_eq!(march_tuesdays.len(), 1);

        // the source table is untouched
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_filtered_is_idempotent() {
        let table = table(vec![
            trip(at(2017, 1, 2, 8), "A", "B", 60.0),
            trip(at(2017, 5, 3, 9), "A", "C", 60.0),
            trip(at(2017, 5, 8, 10), "B", "C", 60.0),
        ]);

        let once = table.filtered(MonthFilter::Only(Month::May), DayFilter::Only(Weekday::Mon));
        let twice = once.filtered(MonthFilter::Only(Month::May), DayFilter::Only(Weekday::Mon));
        assert_eq!(once.trips(), twice.trips());
    }

    #[test]
    fn test_filtered_to_nothing() {
        let table = table(vec![trip(at(2017, 1, 2, 8), "A", "B", 60.0)]);
        let june = table.filtered(MonthFilter::Only(Month::June), DayFilter::All);
        assert!(june.is_empty());
        assert_eq!(june.city(), City::Chicago);
    }
}
