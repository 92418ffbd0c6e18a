//! Terminal rendering
//!
//! Features:
//! - Color-coded prompts and feedback (cyan / green / red)
//! - ASCII staff diagrams with accidentals at their fixed positions

use crate::theory::Family;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::{stdout, Write};

/// Render a staff carrying the first `accidentals` marks of the family
/// cycle. The seven slots sit at the line/space positions the accidentals
/// occupy on a real treble staff; unused line slots keep their dash.
pub fn render_staff(family: Family, accidentals: u8) -> String {
    let mut t = ['-', ' ', ' ', '-', ' ', ' ', '-'];
    let mark = match family {
        Family::Sharp => '#',
        Family::Flat => 'b',
    };
    for slot in t.iter_mut().take(accidentals as usize) {
        *slot = mark;
    }

    match family {
        Family::Sharp => format!(
            "\n        {two}\n----{zero}-----------------------\n              {five}\n----------{three}-----------------\n      {one}\n----------------{six}-----------\n            {four}\n----------------------------\n\n----------------------------\n",
            zero = t[0],
            one = t[1],
            two = t[2],
            three = t[3],
            four = t[4],
            five = t[5],
            six = t[6],
        ),
        Family::Flat => format!(
            "\n            {four}\n----------------{six}-----------\n      {one}\n----------{three}-----------------\n              {five}\n----{zero}-----------------------\n        {two}\n----------------------------\n\n----------------------------\n",
            zero = t[0],
            one = t[1],
            two = t[2],
            three = t[3],
            four = t[4],
            five = t[5],
            six = t[6],
        ),
    }
}

/// Terminal display manager
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Display
    }

    /// Print a question in cyan
    pub fn question(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Plain informational line
    pub fn info(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(stdout, Print(text), Print("\n"))?;
        stdout.flush()?;
        Ok(())
    }

    /// Positive feedback in green
    pub fn correct(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Negative feedback in red
    pub fn incorrect(&self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = stdout();
        execute!(
            stdout,
            SetForegroundColor(Color::Red),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print a staff diagram
    pub fn staff(&self, family: Family, accidentals: u8) -> Result<(), Box<dyn std::error::Error>> {
        self.info(&render_staff(family, accidentals))
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
