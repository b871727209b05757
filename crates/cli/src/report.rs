//! Printing the four statistics sections for a loaded table.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Instant;

use log::debug;

use bikeshare_core::error::Result;
use bikeshare_core::stats::{DurationStats, StationStats, TimeStats, UserStats};
use bikeshare_core::trips::TripTable;

use crate::console::Console;

pub const TIME_HEADING: &str = "Calculating The Most Frequent Times of Travel...";
pub const STATIONS_HEADING: &str = "Calculating The Most Popular Stations and Trip...";
pub const DURATION_HEADING: &str = "Calculating Trip Duration...";
pub const USERS_HEADING: &str = "Calculating User Stats...";

fn section<R, W, T>(
    console: &mut Console<R, W>,
    heading: &str,
    compute: impl FnOnce() -> T,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    T: Display,
{
    console.heading(heading)?;

    let started = Instant::now();
    let stats = compute();
    let elapsed = started.elapsed().as_secs_f64();
    debug!("{heading} finished in {elapsed:.6}s");

    console.write_block(stats)?;
    console.say("")?;
    console.say(format!("This took {elapsed:.6} seconds."))?;
    console.separator()
}

/// Prints every statistics section for `table`, which must not be empty.
pub fn print_reports<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<()> {
    section(console, TIME_HEADING, || TimeStats::compute(table))?;

    // an empty table never reaches here, but the stations section would
    // otherwise have nothing to say
    section(console, STATIONS_HEADING, || {
        StationStats::compute(table).map_or_else(String::new, |stats| stats.to_string())
    })?;

    section(console, DURATION_HEADING, || DurationStats::compute(table))?;
    section(console, USERS_HEADING, || UserStats::compute(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::criteria::City;
    use bikeshare_core::trips::{ColumnPresence, Trip, TripRecord};
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn trip(month: u32, day: u32, hour: u32, from: &str, to: &str) -> Trip {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .and_then(|date| date.and_hms_opt(hour, 15, 0))
            .unwrap();
        let mut record = TripRecord::new(start, 900.0, from, to);
        record.user_type = Some("Subscriber".to_string());
        Trip::from(record)
    }

    #[test]
    fn test_all_sections_printed_in_order() {
        let table = TripTable::new(
            City::Washington,
            ColumnPresence::default(),
            vec![
                trip(1, 2, 8, "Union Station", "Eastern Market"),
                trip(2, 6, 8, "Union Station", "Eastern Market"),
                trip(2, 7, 17, "Eastern Market", "Union Station"),
            ],
        );
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());

        print_reports(&mut console, &table).unwrap();
        let output = String::from_utf8(console.output().clone()).unwrap();

        let positions: Vec<usize> = [TIME_HEADING, STATIONS_HEADING, DURATION_HEADING, USERS_HEADING]
            .iter()
            .map(|heading| output.find(heading).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(output.contains("Most common month of travel is: February"));
        assert!(output.contains("Most common hour for starting travel is: 8"));
        assert!(output.contains("Most common trip is: from Union Station to Eastern Market"));
        assert!(output.contains("Total travel time is: 0.75 hours"));
        assert!(output.contains("Average travel time is: 15.00 minutes"));
        assert!(output.contains("No gender data available for this city"));
        assert_eq!(output.matches("This took ").count(), 4);
    }
}
