//! Total and average trip duration.

use std::fmt::{Display, Formatter};

use crate::stats::round2;
use crate::trips::TripTable;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub trip_count: usize,
}

impl DurationStats {
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        Self {
            total_seconds: table
                .trips()
                .iter()
                .map(|trip| trip.record().duration_seconds)
                .sum(),
            trip_count: table.len(),
        }
    }

    /// Total travel time in hours, rounded to two decimals.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        round2(self.total_seconds / SECONDS_PER_HOUR)
    }

    /// Mean travel time in minutes, rounded to two decimals. `None` without trips.
    #[must_use]
    pub fn mean_minutes(&self) -> Option<f64> {
        if self.trip_count == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let mean_seconds = self.total_seconds / self.trip_count as f64;
        Some(round2(mean_seconds / SECONDS_PER_MINUTE))
    }
}

impl Display for DurationStats {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            formatter,
            "Total travel time is: {:.2} hours",
            self.total_hours()
        )?;

        match self.mean_minutes() {
            Some(mean) => writeln!(formatter, "Average travel time is: {mean:.2} minutes"),
            None => writeln!(formatter, "Average travel time is not available"),
        }
    }
}
