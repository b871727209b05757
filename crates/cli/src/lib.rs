//! Bikeshare CLI Library
//!
//! This crate provides the interactive front end for bikeshare: it asks for a
//! city, month and day, loads the matching trips through `bikeshare-core`,
//! optionally shows the raw rows five at a time and prints the statistics.
//!
//! # Key Features
//!
//! - **Validated Prompts**: Every question is repeated until the answer is valid
//! - **Raw Data Review**: Page through the filtered rows on request
//! - **Statistics Report**: Travel times, stations, durations and user demographics
//! - **Restartable Sessions**: Start over with new filters without leaving the tool
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`console`]: Line-oriented input and output over any reader and writer
//! - [`selection`]: Filter and yes/no prompts
//! - [`raw_data`]: Paged display of loaded rows
//! - [`report`]: The four statistics sections
//! - [`session`]: The run loop tying everything together
//!
//! # Examples
//!
//! ```bash
//! # Read the CSV files from the current directory
//! bikeshare
//!
//! # Read them from elsewhere
//! bikeshare --data-dir ~/datasets/bikeshare
//!
//! # Use a city catalog
//! bikeshare --config-path ./cities.yml
//! ```

pub mod cli_args;
pub mod console;
pub mod raw_data;
pub mod report;
pub mod selection;
pub mod session;
