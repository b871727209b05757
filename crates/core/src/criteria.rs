//! Filter criteria chosen by the user: a city plus optional month and weekday.
//!
//! All matching is case-insensitive and uses fixed English names, independent
//! of the system locale.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::error::Error;
use crate::trips::Trip;

/// The keyword that disables a month or day filter.
pub const ALL: &str = "all";

const MONTHS: [(Month, &str); 12] = [
    (Month::January, "January"),
    (Month::February, "February"),
    (Month::March, "March"),
    (Month::April, "April"),
    (Month::May, "May"),
    (Month::June, "June"),
    (Month::July, "July"),
    (Month::August, "August"),
    (Month::September, "September"),
    (Month::October, "October"),
    (Month::November, "November"),
    (Month::December, "December"),
];

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
    (Weekday::Sun, "Sunday"),
];

/// Month for a zero-based month index as returned by `Datelike::month0`.
pub(crate) fn month_of(month0: u32) -> Month {
    MONTHS[month0 as usize % 12].0
}

/// English name of a month, e.g. `"March"`.
#[must_use]
pub fn month_name(month: Month) -> &'static str {
    MONTHS[month.number_from_month() as usize - 1].1
}

/// English name of a weekday, e.g. `"Tuesday"`.
#[must_use]
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_monday() as usize].1
}

/// Looks up a month by its full English name.
#[must_use]
pub fn parse_month(input: &str) -> Option<Month> {
    let input = input.trim();
    MONTHS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(input))
        .map(|(month, _)| *month)
}

/// Looks up a weekday by its full English name.
#[must_use]
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    let input = input.trim();
    WEEKDAYS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(input))
        .map(|(weekday, _)| *weekday)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The name a user types to select this city.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    #[must_use]
    pub fn default_file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(input))
    }

    #[must_use]
    pub fn choices() -> Vec<&'static str> {
        Self::ALL.iter().map(City::name).collect()
    }
}

impl Display for City {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| Error::UnknownCity(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Accepts `"all"` or a full month name.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case(ALL) {
            return Some(MonthFilter::All);
        }

        parse_month(input).map(MonthFilter::Only)
    }

    #[must_use]
    pub fn matches(&self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(only) => *only == month,
        }
    }

    #[must_use]
    pub fn choices() -> Vec<String> {
        MONTHS
            .iter()
            .map(|(_, name)| name.to_lowercase())
            .chain(std::iter::once(ALL.to_string()))
            .collect()
    }
}

impl Display for MonthFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthFilter::All => formatter.write_str(ALL),
            MonthFilter::Only(month) => formatter.write_str(&month_name(*month).to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Accepts `"all"` or a full weekday name.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().eq_ignore_ascii_case(ALL) {
            return Some(DayFilter::All);
        }

        parse_weekday(input).map(DayFilter::Only)
    }

    #[must_use]
    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(only) => *only == weekday,
        }
    }

    #[must_use]
    pub fn choices() -> Vec<String> {
        WEEKDAYS
            .iter()
            .map(|(_, name)| name.to_lowercase())
            .chain(std::iter::once(ALL.to_string()))
            .collect()
    }
}

impl Display for DayFilter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DayFilter::All => formatter.write_str(ALL),
            DayFilter::Only(weekday) => {
                formatter.write_str(&weekday_name(*weekday).to_lowercase())
            }
        }
    }
}

/// The validated (city, month, day) triple. Immutable once collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    #[must_use]
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    #[must_use]
    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month()) && self.day.matches(trip.weekday())
    }

    /// One line describing which filters apply to the loaded data.
    #[must_use]
    pub fn describe(&self) -> String {
        match (self.month, self.day) {
            (MonthFilter::All, DayFilter::All) => {
                "All days of the week on all months are considered for calculations".to_string()
            }
            (MonthFilter::Only(_), DayFilter::All) => format!(
                "Filtering {} data by month: {} and considering all days of week",
                self.city, self.month
            ),
            (MonthFilter::All, DayFilter::Only(_)) => format!(
                "Filtering {} data by day of week: {} and considering all months",
                self.city, self.day
            ),
            (MonthFilter::Only(_), DayFilter::Only(_)) => format!(
                "Filtering {} data by month: {} and by day of week: {}",
                self.city, self.month, self.day
            ),
        }
    }
}

impl Display for FilterCriteria {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "City: {}, month: {}, day: {}",
            self.city, self.month, self.day
        )
    }
}
