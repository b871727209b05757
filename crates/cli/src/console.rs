//! Line-oriented terminal I/O.
//!
//! The console wraps any reader and writer so the interactive flow can be
//! driven from a real terminal or from scripted input in tests.

use std::fmt::Display;
use std::io::{BufRead, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};

use bikeshare_core::error::{Error, Result};

/// Rule printed between sections of output.
pub const SEPARATOR: &str = "----------------------------------------";

pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
        }
    }

    /// Enables bold headings. Only useful when the output is a terminal.
    #[must_use]
    pub fn with_style(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    /// Shows `prompt` and reads one line of input, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] when the input has ended, or an I/O error.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            writeln!(self.output)?;
            return Err(Error::InputClosed);
        }

        Ok(input.trim().to_string())
    }

    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Writes text that already carries its own line breaks.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_block(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{text}")?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn separator(&mut self) -> Result<()> {
        self.say(SEPARATOR)
    }

    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn heading(&mut self, text: &str) -> Result<()> {
        writeln!(self.output)?;
        if self.styled {
            queue!(
                self.output,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset),
                Print("\n")
            )?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}
