//! Most popular stations and trip.

use std::fmt::{Display, Formatter};

use crate::frequency::FrequencyTable;
use crate::trips::{Trip, TripTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    /// Formatted as `from {start} to {end}`.
    pub trip: String,
}

/// The combined start/end description of a trip.
#[must_use]
pub fn trip_description(trip: &Trip) -> String {
    let record = trip.record();
    format!("from {} to {}", record.start_station, record.end_station)
}

impl StationStats {
    /// Returns `None` for an empty table.
    #[must_use]
    pub fn compute(table: &TripTable) -> Option<Self> {
        let trips = table.trips();

        let start_stations: FrequencyTable<&str> = trips
            .iter()
            .map(|trip| trip.record().start_station.as_str())
            .collect();
        let end_stations: FrequencyTable<&str> = trips
            .iter()
            .map(|trip| trip.record().end_station.as_str())
            .collect();
        let combinations: FrequencyTable<String> = trips.iter().map(trip_description).collect();

        Some(Self {
            start_station: (*start_stations.mode()?).to_string(),
            end_station: (*end_stations.mode()?).to_string(),
            trip: combinations.mode()?.clone(),
        })
    }
}

impl Display for StationStats {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            formatter,
            "Most common start station is: {}",
            self.start_station
        )?;
        writeln!(formatter, "Most common end station is: {}", self.end_station)?;
        writeln!(formatter, "Most common trip is: {}", self.trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trips::test_support::{at, table, trip};

    #[test]
    fn test_most_common_stations_and_trip() {
        let table = table(vec![
            trip(at(2017, 1, 2, 8), "Canal St", "Clark St", 60.0),
            trip(at(2017, 1, 2, 9), "Canal St", "State St", 60.0),
            trip(at(2017, 1, 2, 10), "Lake St", "State St", 60.0),
            trip(at(2017, 1, 2, 11), "Lake St", "State St", 60.0),
            trip(at(2017, 1, 2, 12), "Canal St", "Lake St", 60.0),
        ]);

        let stats = StationStats::compute(&table).unwrap();
        assert_eq!(stats.start_station, "Canal St");
        assert_eq!(stats.end_station, "State St");
        assert_eq!(stats.trip, "from Lake St to State St");

        let rendered = stats.to_string();
        assert!(rendered.contains("Most common trip is: from Lake St to State St"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(StationStats::compute(&table(vec![])), None);
    }
}
