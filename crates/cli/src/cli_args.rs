//! Command-line argument parsing.
//!
//! Both options are optional; without them the tool reads `chicago.csv`,
//! `new_york_city.csv` and `washington.csv` from the current directory.

use clap::Parser;

/// Command-line arguments for the bikeshare CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use bikeshare_cli::cli_args::Args;
///
/// let args = Args::parse_from(["bikeshare", "--data-dir", "./data"]);
/// assert_eq!(args.data_dir.as_deref(), Some("./data"));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the city catalog YAML mapping each city to its CSV file.
    ///
    /// If not provided, `~/.bikeshare/cities.yml` is used when it exists.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Directory holding the city CSV files.
    ///
    /// Overrides the catalog's `data_directory`. Defaults to the current directory.
    #[arg(long, short = 'd')]
    pub data_dir: Option<String>,
}
