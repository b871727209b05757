//! Most frequent times of travel.

use std::fmt::{Display, Formatter};
use std::hash::Hash;

use chrono::{Month, Weekday};

use crate::criteria::{month_name, weekday_name};
use crate::frequency::FrequencyTable;
use crate::trips::TripTable;

pub const MONTH_NOT_APPLICABLE: &str =
    "Most common month does not make sense with your selection";
pub const WEEKDAY_NOT_APPLICABLE: &str =
    "Most common day of the week does not make sense with your selection";
pub const HOUR_NOT_APPLICABLE: &str = "Looks like there is no data to display";

/// A statistic that only means something when the data varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic<T> {
    Value(T),
    NotApplicable,
}

impl<T> Statistic<T> {
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Statistic::Value(value) => Some(value),
            Statistic::NotApplicable => None,
        }
    }
}

/// Mode of the values, provided at least two distinct values occur.
fn mode_of_varied<T: Eq + Hash + Clone>(values: impl Iterator<Item = T>) -> Statistic<T> {
    let table: FrequencyTable<T> = values.collect();
    if table.distinct() < 2 {
        return Statistic::NotApplicable;
    }

    table
        .mode()
        .cloned()
        .map_or(Statistic::NotApplicable, Statistic::Value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: Statistic<Month>,
    pub weekday: Statistic<Weekday>,
    pub hour: Statistic<u32>,
}

impl TimeStats {
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let trips = table.trips();

        Self {
            month: mode_of_varied(trips.iter().map(|trip| trip.month())),
            weekday: mode_of_varied(trips.iter().map(|trip| trip.weekday())),
            hour: mode_of_varied(trips.iter().map(|trip| trip.hour())),
        }
    }
}

impl Display for TimeStats {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.month.value() {
            Some(&month) => writeln!(
                formatter,
                "Most common month of travel is: {}",
                month_name(month)
            )?,
            None => writeln!(formatter, "{MONTH_NOT_APPLICABLE}")?,
        }

        match self.weekday.value() {
            Some(&weekday) => writeln!(
                formatter,
                "Most common day of travel is: {}",
                weekday_name(weekday)
            )?,
            None => writeln!(formatter, "{WEEKDAY_NOT_APPLICABLE}")?,
        }

        match self.hour.value() {
            Some(hour) => writeln!(formatter, "Most common hour for starting travel is: {hour}"),
            None => writeln!(formatter, "{HOUR_NOT_APPLICABLE}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::test_support::{at, table, trip};

    #[test]
    fn test_single_month_is_not_applicable() {
        let table = table(vec![
            trip(at(2017, 3, 6, 8), "A", "B", 60.0),
            trip(at(2017, 3, 7, 8), "A", "B", 60.0),
            trip(at(2017, 3, 7, 9), "A", "B", 60.0),
        ]);

        let stats = TimeStats::compute(&table);
        assert_eq!(stats.month, Statistic::NotApplicable);
        assert_eq!(stats.weekday, Statistic::Value(Weekday::Tue));
        assert_eq!(stats.hour, Statistic::Value(8));

        let rendered = stats.to_string();
        assert!(rendered.contains(MONTH_NOT_APPLICABLE));
        assert!(rendered.contains("Most common day of travel is: Tuesday"));
        assert!(rendered.contains("Most common hour for starting travel is: 8"));
    }

    #[test]
    fn test_varied_data() {
        let table = table(vec![
            trip(at(2017, 1, 2, 17), "A", "B", 60.0),
            trip(at(2017, 6, 5, 17), "A", "B", 60.0),
            trip(at(2017, 6, 6, 8), "A", "B", 60.0),
        ]);

        let stats = TimeStats::compute(&table);
        assert_eq!(stats.month, Statistic::Value(Month::June));
        // Monday twice
        assert_eq!(stats.weekday, Statistic::Value(Weekday::Mon));
        assert_eq!(stats.hour, Statistic::Value(17));
        assert_eq!(stats.hour.value(), Some(&17));
        assert!(stats.to_string().contains("Most common month of travel is: June"));
    }

    #[test]
    fn test_single_trip_has_no_applicable_statistic() {
        let table = table(vec![trip(at(2017, 2, 1, 12), "A", "B", 60.0)]);
        let stats = TimeStats::compute(&table);

        assert_eq!(stats.month, Statistic::NotApplicable);
        assert_eq!(stats.weekday, Statistic::NotApplicable);
        assert_eq!(stats.hour, Statistic::NotApplicable);
        assert_eq!(stats.hour.value(), None);

        let rendered = stats.to_string();
        assert!(rendered.contains(WEEKDAY_NOT_APPLICABLE));
        assert!(rendered.contains(HOUR_NOT_APPLICABLE));
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        let table = table(vec![
            trip(at(2017, 4, 3, 10), "A", "B", 60.0),
            trip(at(2017, 2, 6, 11), "A", "B", 60.0),
        ]);

        let stats = TimeStats::compute(&table);
        assert_eq!(stats.month, Statistic::Value(Month::April));
        assert_eq!(stats.hour, Statistic::Value(10));
    }
}
