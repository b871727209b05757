//! Collecting the city, month and day to analyse.

use std::io::{BufRead, Write};

use log::info;

use bikeshare_core::criteria::{City, DayFilter, FilterCriteria, MonthFilter};
use bikeshare_core::error::Result;

use super::input::prompt_choice;
use crate::console::Console;

/// Prompts for city, month and day until each is valid.
pub fn collect_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<FilterCriteria> {
    console.say("")?;
    console.say("Hello! Let's explore some US bikeshare data!")?;
    console.say("")?;

    let city = prompt_choice(
        console,
        "cities",
        "Please enter a city name you want to consult:",
        &City::choices(),
        City::parse,
    )?;

    let months = MonthFilter::choices();
    let month = prompt_choice(
        console,
        "month values",
        "Please enter a month you want to consult, or all for unfiltered data:",
        &months.iter().map(String::as_str).collect::<Vec<_>>(),
        MonthFilter::parse,
    )?;

    let days = DayFilter::choices();
    let day = prompt_choice(
        console,
        "day values",
        "Please enter a day of week you want to consult, or all for unfiltered data:",
        &days.iter().map(String::as_str).collect::<Vec<_>>(),
        DayFilter::parse,
    )?;

    let criteria = FilterCriteria::new(city, month, day);
    info!("Selected filters: {criteria}");

    console.separator()?;
    console.say(format!("Your chosen data filters are: {criteria}"))?;
    console.separator()?;

    Ok(criteria)
}
