//! The interactive run loop.
//!
//! One iteration collects filters, loads and filters the chosen city's data,
//! offers the raw rows, prints the statistics and then asks whether to start
//! over. Each step is a [`State`] so the loop reads as a sequence of
//! transitions.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use bikeshare_core::config::CityCatalog;
use bikeshare_core::criteria::FilterCriteria;
use bikeshare_core::error::{Error, Result};
use bikeshare_core::loader::load_data;
use bikeshare_core::trips::TripTable;

use crate::console::Console;
use crate::raw_data::review_raw_data;
use crate::report::print_reports;
use crate::selection::{collect_filters, Answer};

pub const NO_DATA_MESSAGE: &str = "There is no data for your selection";
pub const RESTART_PROMPT: &str = "Would you like to restart? Enter yes or no.";

#[derive(Debug)]
enum State {
    CollectFilters,
    Load(FilterCriteria),
    Empty,
    Report(TripTable),
    AskRestart,
    Terminate,
}

fn load<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &CityCatalog,
    criteria: FilterCriteria,
) -> Result<State> {
    console.heading("Loading required data")?;
    console.say(criteria.describe())?;

    match load_data(catalog, &criteria) {
        Ok(table) if table.is_empty() => Ok(State::Empty),
        Ok(table) => Ok(State::Report(table)),
        Err(e) if e.is_data_unavailable() => {
            warn!("Loading {} failed: {e}", criteria.city);
            console.say(format!("Could not load data for {}: {e}", criteria.city))?;
            Ok(State::AskRestart)
        }
        Err(e) => Err(e),
    }
}

fn ask_restart<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<State> {
    let answer = match console.ask(RESTART_PROMPT) {
        Ok(answer) => answer,
        Err(Error::InputClosed) => return Ok(State::Terminate),
        Err(e) => return Err(e),
    };

    if Answer::parse(&answer) == Some(Answer::Yes) {
        Ok(State::CollectFilters)
    } else {
        Ok(State::Terminate)
    }
}

/// Runs the interactive loop until the user declines to restart.
///
/// # Errors
///
/// Returns an error if the console fails, if input ends before the restart
/// prompt, or on any failure other than unavailable trip data.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &CityCatalog,
) -> Result<()> {
    let mut state = State::CollectFilters;
    let mut iterations = 0_usize;

    loop {
        state = match state {
            State::CollectFilters => {
                iterations += 1;
                debug!("Starting iteration {iterations}");
                State::Load(collect_filters(console)?)
            }
            State::Load(criteria) => load(console, catalog, criteria)?,
            State::Empty => {
                console.say(NO_DATA_MESSAGE)?;
                console.separator()?;
                State::AskRestart
            }
            State::Report(table) => {
                review_raw_data(console, &table)?;
                print_reports(console, &table)?;
                State::AskRestart
            }
            State::AskRestart => ask_restart(console)?,
            State::Terminate => break,
        };
    }

    info!("Finished after {iterations} iteration(s)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_restart_answers() {
        assert!(matches!(
            ask_restart(&mut console("YES\n")).unwrap(),
            State::CollectFilters
        ));
        assert!(matches!(
            ask_restart(&mut console("no\n")).unwrap(),
            State::Terminate
        ));
        assert!(matches!(
            ask_restart(&mut console("maybe\n")).unwrap(),
            State::Terminate
        ));
        assert!(matches!(
            ask_restart(&mut console("")).unwrap(),
            State::Terminate
        ));
    }

    #[test]
    fn test_missing_file_goes_to_restart_prompt() {
        let directory = tempfile::tempdir().unwrap();
        let catalog = CityCatalog::new(directory.path());
        let mut console = console("chicago\nall\nall\nno\n");

        run(&mut console, &catalog).unwrap();

        let output = String::from_utf8(console.output().clone()).unwrap();
        assert!(output.contains("Could not load data for chicago"));
        assert!(output.contains(RESTART_PROMPT));
        assert!(!output.contains("Calculating"));
    }

    #[test]
    fn test_input_closed_mid_prompt_is_an_error() {
        let catalog = CityCatalog::new(".");
        let mut console = console("chicago\n");

        let result = run(&mut console, &catalog);
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
