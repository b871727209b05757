//! Loading trip data for a city from its CSV file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use log::{debug, info};

use crate::config::CityCatalog;
use crate::criteria::{City, FilterCriteria};
use crate::error::{Error, Result};
use crate::trips::{columns, ColumnPresence, RawTripRow, Trip, TripRecord, TripTable};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parses a start or end time such as `2017-06-23 15:09:32`.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn check_columns(source: &str, headers: &StringRecord) -> Result<ColumnPresence> {
    let has = |column: &str| headers.iter().any(|header| header == column);

    if let Some(missing) = columns::REQUIRED.iter().find(|&&column| !has(column)) {
        return Err(Error::missing_column(source.to_string(), missing));
    }

    Ok(ColumnPresence {
        gender: has(columns::GENDER),
        birth_year: has(columns::BIRTH_YEAR),
    })
}

fn to_record(source: &str, line: u64, row: RawTripRow) -> Result<TripRecord> {
    let invalid = |value: &str| Error::InvalidTimestamp {
        path: source.to_string(),
        line,
        value: value.to_string(),
    };

    let start_time = parse_timestamp(&row.start_time).ok_or_else(|| invalid(&row.start_time))?;
    let end_time = match non_blank(row.end_time) {
        Some(end_time) => Some(parse_timestamp(&end_time).ok_or_else(|| invalid(&end_time))?),
        None => None,
    };

    Ok(TripRecord {
        start_time,
        end_time,
        duration_seconds: row.trip_duration,
        start_station: row.start_station,
        end_station: row.end_station,
        user_type: non_blank(row.user_type),
        gender: non_blank(row.gender),
        birth_year: row.birth_year,
    })
}

/// Reads every trip from CSV data. `source` names the data in errors.
///
/// # Errors
///
/// Returns an error if the CSV is malformed, lacks a required column, or holds
/// an unparseable timestamp.
pub fn read_trips<R: Read>(city: City, source: &str, reader: R) -> Result<TripTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::csv_error(source.to_string(), e))?
        .clone();
    let presence = check_columns(source, &headers)?;

    let mut trips = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::csv_error(source.to_string(), e))?;
        let line = record.position().map_or(0, csv::Position::line);

        let row: RawTripRow = record
            .deserialize(Some(&headers))
            .map_err(|e| Error::csv_error(source.to_string(), e))?;

        trips.push(Trip::from(to_record(source, line, row)?));
    }

    debug!("Read {} trips from `{}`", trips.len(), source);

    Ok(TripTable::new(city, presence, trips))
}

/// Reads the full trip table for one city from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its contents are invalid.
pub fn load_trips(city: City, path: &Path) -> Result<TripTable> {
    let display_path = path.display().to_string();
    info!("Loading {} trip data from `{}`", city, display_path);

    let file = File::open(path)
        .map_err(|e| Error::io_error("trip data".to_string(), display_path.clone(), e))?;

    read_trips(city, &display_path, file)
}

/// Loads the chosen city's data and applies the month and day filters.
///
/// # Errors
///
/// Returns an error if the city's data is unavailable.
pub fn load_data(catalog: &CityCatalog, criteria: &FilterCriteria) -> Result<TripTable> {
    let path = catalog.path_for(criteria.city);
    let table = load_trips(criteria.city, &path)?;
    let filtered = table.filtered_by(criteria);

    info!(
        "{} of {} trips match {}",
        filtered.len(),
        table.len(),
        criteria
    );

    Ok(filtered)
}
