//! User type, gender and birth year breakdowns.

use std::fmt::{Display, Formatter};

use itertools::{Itertools, MinMaxResult};

use crate::frequency::FrequencyTable;
use crate::trips::TripTable;

pub const NO_GENDER_DATA: &str = "No gender data available for this city";
pub const NO_BIRTH_YEAR_DATA: &str = "No birth year data available for this city";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    /// Birth year of the eldest user.
    pub earliest: i64,
    /// Birth year of the youngest user.
    pub latest: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city's data has no gender column or no gender values.
    pub genders: Option<Vec<(String, usize)>>,
    /// `None` when the city's data has no usable birth years.
    pub birth_years: Option<BirthYearStats>,
}

fn counts_of<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<(String, usize)> {
    let table: FrequencyTable<&str> = values.flatten().collect();
    table
        .value_counts()
        .into_iter()
        .map(|(value, count)| ((*value).to_string(), count))
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn birth_year_stats(years: &[f64]) -> Option<BirthYearStats> {
    let truncated: Vec<i64> = years.iter().map(|year| year.trunc() as i64).collect();

    let (earliest, latest) = match truncated.iter().copied().minmax() {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(year) => (year, year),
        MinMaxResult::MinMax(min, max) => (min, max),
    };

    let frequencies: FrequencyTable<i64> = truncated.into_iter().collect();
    let most_common = *frequencies.mode()?;

    Some(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}

impl UserStats {
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        let columns = table.columns();

        let user_types = counts_of(
            trips
                .iter()
                .map(|trip| trip.record().user_type.as_deref()),
        );

        let genders = columns
            .gender
            .then(|| counts_of(trips.iter().map(|trip| trip.record().gender.as_deref())))
            .filter(|counts| !counts.is_empty());

        let birth_years = if columns.birth_year {
            let years: Vec<f64> = trips
                .iter()
                .filter_map(|trip| trip.record().birth_year)
                .filter(|year| year.is_finite())
                .collect();
            birth_year_stats(&years)
        } else {
            None
        };

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn write_counts(
    formatter: &mut Formatter<'_>,
    label: &str,
    counts: &[(String, usize)],
) -> std::fmt::Result {
    let width = counts
        .iter()
        .map(|(value, _)| value.chars().count())
        .chain(std::iter::once(label.len()))
        .max()
        .unwrap_or(0);

    writeln!(formatter, "{label:<width$}  Count")?;
    for (value, count) in counts {
        writeln!(formatter, "{value:<width$}  {count}")?;
    }

    Ok(())
}

impl Display for UserStats {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write_counts(formatter, "User Type", &self.user_types)?;
        writeln!(formatter)?;

        match &self.genders {
            Some(genders) => write_counts(formatter, "Gender", genders)?,
            None => writeln!(formatter, "{NO_GENDER_DATA}")?,
        }
        writeln!(formatter)?;

        match &self.birth_years {
            Some(years) => writeln!(
                formatter,
                "Earliest year of birth is {}, latest year of birth is {}, most common year of birth is {}",
                years.earliest, years.latest, years.most_common
            ),
            None => writeln!(formatter, "{NO_BIRTH_YEAR_DATA}"),
        }
    }
}
