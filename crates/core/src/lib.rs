//! Bikeshare Core Library
//!
//! This crate provides the data handling for bikeshare, an interactive tool that
//! explores bicycle-share trip data for Chicago, New York City and Washington.
//!
//! # Key Features
//!
//! - **City Catalog**: Map each city to its CSV file, optionally from a YAML config
//! - **Trip Loading**: Parse trip CSV files and derive month, weekday and hour
//! - **Filtering**: Restrict trips to a month and/or day of week
//! - **Statistics**: Travel times, stations, durations and user demographics
//! - **Paging**: Walk loaded rows five at a time for raw data review
//! - **Error Handling**: A single error type covering every failure mode
//!
//! # Examples
//!
//! Loading March trips for Chicago and computing the time statistics:
//!
//! ```no_run
//! use bikeshare_core::config::CityCatalog;
//! use bikeshare_core::criteria::{City, DayFilter, FilterCriteria, MonthFilter};
//! use bikeshare_core::loader::load_data;
//! use bikeshare_core::stats::TimeStats;
//!
//! let catalog = CityCatalog::new("./data");
//! let criteria = FilterCriteria::new(
//!     City::Chicago,
//!     MonthFilter::parse("march").unwrap(),
//!     DayFilter::All,
//! );
//! let table = load_data(&catalog, &criteria)?;
//! println!("{}", TimeStats::compute(&table));
//! # Ok::<(), bikeshare_core::error::Error>(())
//! ```

pub mod config;
pub mod criteria;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod pages;
pub mod stats;
pub mod trips;
