//! Console input handling
//!
//! Answers arrive one line at a time, so this reads buffered lines from
//! stdin rather than raw keystrokes. End of input (closed pipe, Ctrl+D)
//! is reported as `None` and treated upstream like the quit sentinel.

use crate::cli::display::Display;
use crate::drill::session::QuizIo;
use crate::theory::Family;
use std::error::Error;
use std::io::{self, BufRead, Write};

/// Line-oriented console implementing the quiz's I/O collaborator
pub struct Console {
    display: Display,
}

impl Console {
    pub fn new() -> Self {
        Console {
            display: Display::new(),
        }
    }

    fn read_line(&self) -> Result<Option<String>, Box<dyn Error>> {
        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }
}

impl QuizIo for Console {
    fn prompt(&mut self, text: &str) -> Result<Option<String>, Box<dyn Error>> {
        if !text.is_empty() {
            self.display.question(text)?;
        }
        io::stdout().flush()?;
        self.read_line()
    }

    fn show(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.display.info(text)
    }

    fn correct(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.display.correct(text)
    }

    fn incorrect(&mut self, text: &str) -> Result<(), Box<dyn Error>> {
        self.display.incorrect(text)
    }

    fn show_staff(&mut self, family: Family, accidentals: u8) -> Result<(), Box<dyn Error>> {
        self.display.staff(family, accidentals)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
