//! Descriptive statistics over a filtered trip table.
//!
//! Each reporter is a stateless computation over a [`TripTable`] that returns
//! a plain value; rendering is left to the caller through `Display`.
//!
//! - [`time`]: most common month, weekday and start hour
//! - [`stations`]: most common start station, end station and trip
//! - [`duration`]: total and mean trip duration
//! - [`users`]: user type, gender and birth year breakdowns
//!
//! [`TripTable`]: crate::trips::TripTable

pub mod duration;
pub mod stations;
pub mod time;
pub mod users;

pub use duration::DurationStats;
pub use stations::StationStats;
pub use time::{Statistic, TimeStats};
pub use users::{BirthYearStats, UserStats};

/// Rounds to two decimal places, the precision every duration is reported in.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert!((round2(1.234_5) - 1.23).abs() < 1e-9);
        assert!((round2(1.235_1) - 1.24).abs() < 1e-9);
        assert!((round2(0.0)).abs() < 1e-9);
    }
}
