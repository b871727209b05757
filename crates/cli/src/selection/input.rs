use std::io::{BufRead, Write};

use itertools::Itertools;
use log::debug;

use bikeshare_core::error::Result;

use super::types::Answer;
use crate::console::Console;

/// Asks until `parse` accepts the answer, listing the valid choices first.
pub fn prompt_choice<T, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    subject: &str,
    prompt: &str,
    choices: &[&str],
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    loop {
        console.say(format!(
            "You have to select one of the following {subject}: {}",
            choices.iter().join(", ")
        ))?;

        let answer = console.ask(prompt)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }

        debug!("Rejected {subject} answer {answer:?}");
    }
}

/// Asks a yes/no question until the answer is one of the two.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Answer> {
    loop {
        let answer = console.ask(prompt)?;
        if let Some(answer) = Answer::parse(&answer) {
            return Ok(answer);
        }

        console.say("Please answer yes or no")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::error::Error;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_choice_retries_until_valid() {
        let mut console = console("three\n\n2\n");
        let value = prompt_choice(&mut console, "numbers", "Pick:", &["1", "2"], |s| {
            s.parse::<u8>().ok().filter(|n| *n <= 2)
        })
        .unwrap();

        assert_eq!(value, 2);
        let output = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(
            output
                .matches("You have to select one of the following numbers: 1, 2")
                .count(),
            3
        );
    }

    #[test]
    fn test_prompt_choice_input_closed() {
        let mut console = console("nope\n");
        let result = prompt_choice(&mut console, "numbers", "Pick:", &["1"], |_| None::<u8>);
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_prompt_yes_no() {
        let mut console = console("maybe\nNO\n");
        assert_eq!(prompt_yes_no(&mut console, "Continue?").unwrap(), Answer::No);

        let output = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(output.matches("Please answer yes or no").count(), 1);
    }
}
