//! Raw data review: shows the loaded trips a page at a time on request.

use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;

use bikeshare_core::error::Result;
use bikeshare_core::pages::{Page, Pager, PAGE_SIZE};
use bikeshare_core::trips::{ColumnPresence, Trip, TripTable};

use crate::console::Console;
use crate::selection::{prompt_yes_no, Answer};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn header(columns: ColumnPresence) -> Vec<String> {
    let mut header: Vec<String> = [
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    if columns.gender {
        header.push("Gender".to_string());
    }
    if columns.birth_year {
        header.push("Birth Year".to_string());
    }

    header
}

fn cells(index: usize, trip: &Trip, columns: ColumnPresence) -> Vec<String> {
    let record = trip.record();
    let mut cells = vec![
        index.to_string(),
        record.start_time.format(TIME_FORMAT).to_string(),
        record
            .end_time
            .map(|end_time| end_time.format(TIME_FORMAT).to_string())
            .unwrap_or_default(),
        record.duration_seconds.to_string(),
        record.start_station.clone(),
        record.end_station.clone(),
        record.user_type.clone().unwrap_or_default(),
    ];

    if columns.gender {
        cells.push(record.gender.clone().unwrap_or_default());
    }
    if columns.birth_year {
        cells.push(
            record
                .birth_year
                .map(|year| format!("{year:.0}"))
                .unwrap_or_default(),
        );
    }

    cells
}

/// Renders one page of trips as an aligned table with a header line.
#[must_use]
pub fn render_rows(page: &Page<'_, Trip>, columns: ColumnPresence) -> String {
    let lines: Vec<Vec<String>> = std::iter::once(header(columns))
        .chain(
            page.rows
                .iter()
                .enumerate()
                .map(|(offset, trip)| cells(page.start + offset, trip, columns)),
        )
        .collect();

    let widths: Vec<usize> = (0..lines[0].len())
        .map(|column| {
            lines
                .iter()
                .map(|line| line[column].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    lines
        .iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .join("  ")
                .trim_end()
                .to_string()
        })
        .map(|line| line + "\n")
        .collect()
}

/// Offers the table's rows a page at a time until the user declines or every
/// row has been shown. Returns the number of rows printed.
pub fn review_raw_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let mut pager = Pager::new(table.trips(), PAGE_SIZE);
    let mut shown = 0;

    while pager.has_more() {
        let prompt = if pager.offset() == 0 {
            format!("Would you like to see {PAGE_SIZE} rows of raw data first? Enter yes or no.")
        } else {
            format!("Would you like to see the next {PAGE_SIZE} rows? Enter yes or no.")
        };

        if prompt_yes_no(console, &prompt)? == Answer::No {
            break;
        }

        if let Some(page) = pager.next_page() {
            console.say(format!("Printing rows {} to {}", page.start, page.end()))?;
            console.write_block(render_rows(&page, table.columns()))?;
            shown += page.rows.len();
        }
    }

    debug!("Showed {} of {} raw rows", shown, table.len());
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::criteria::City;
    use bikeshare_core::trips::TripRecord;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn trips(count: usize) -> TripTable {
        let start = NaiveDate::from_ymd_opt(2017, 6, 1)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .unwrap();
        let trips = (0..count)
            .map(|i| {
                let mut record =
                    TripRecord::new(start, 300.0, &format!("Station {i}"), "Union Station");
                record.user_type = Some("Subscriber".to_string());
                Trip::from(record)
            })
            .collect();

        TripTable::new(City::Washington, ColumnPresence::default(), trips)
    }

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_render_rows_alignment() {
        let table = trips(2);
        let mut pager = Pager::new(table.trips(), PAGE_SIZE);
        let rendered = render_rows(&pager.next_page().unwrap(), table.columns());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Start Station"));
        assert!(!lines[0].contains("Gender"));
        assert!(lines[1].starts_with("0  2017-06-01 09:00:00"));
        assert!(lines[2].contains("Station 1"));
    }

    #[test]
    fn test_optional_columns_rendered_when_present() {
        let start = NaiveDate::from_ymd_opt(2017, 6, 1)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .unwrap();
        let mut record = TripRecord::new(start, 60.0, "A", "B");
        record.gender = Some("Female".to_string());
        record.birth_year = Some(1984.0);
        let table = TripTable::new(
            City::Chicago,
            ColumnPresence {
                gender: true,
                birth_year: true,
            },
            vec![Trip::from(record)],
        );

        let mut pager = Pager::new(table.trips(), PAGE_SIZE);
        let rendered = render_rows(&pager.next_page().unwrap(), table.columns());
        assert!(rendered.contains("Birth Year"));
        assert!(rendered.contains("Female"));
        assert!(rendered.contains("1984"));
    }

    #[test]
    fn test_review_stops_on_no() {
        let table = trips(12);
        let mut console = console("yes\nno\n");

        let shown = review_raw_data(&mut console, &table).unwrap();
        assert_eq!(shown, 5);

        let output = String::from_utf8(console.output().clone()).unwrap();
        assert!(output.contains("Printing rows 0 to 5"));
        assert!(!output.contains("Printing rows 5 to 10"));
    }

    #[test]
    fn test_review_invalid_answer_does_not_advance() {
        let table = trips(7);
        let mut console = console("sure\nyes\nyes\n");

        let shown = review_raw_data(&mut console, &table).unwrap();
        assert_eq!(shown, 7);

        let output = String::from_utf8(console.output().clone()).unwrap();
        assert!(output.contains("Please answer yes or no"));
        assert!(output.contains("Printing rows 0 to 5"));
        assert!(output.contains("Printing rows 5 to 7"));
    }

    #[test]
    fn test_review_ends_after_last_page() {
        let table = trips(3);
        // the trailing answer is never read
        let mut console = console("yes\nyes\n");

        assert_eq!(review_raw_data(&mut console, &table).unwrap(), 3);
        let output = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(output.matches("Enter yes or no").count(), 1);
    }
}
