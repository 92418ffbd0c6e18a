//! Quiz round state machine
//!
//! One round walks START -> COUNT_OR_STAFF -> ACCIDENTAL_SPELLING ->
//! SCALE_SPELLING -> DONE. A wrong answer at any stage ends the round as
//! FAILED: the key's weight is penalized and it is queued for an
//! immediate re-ask. The quit sentinel (or end of input) at any prompt
//! ends the round as Quit so the caller can persist and shut down.

use crate::drill::selector::Selector;
use crate::drill::weights::{ReinforcementPolicy, WeightTable};
use crate::theory::{self, answer, Family, KeySig};
use rand::Rng;
use std::error::Error;

/// How a round ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every stage answered correctly; the key's weight was halved and
    /// the table should be persisted
    Passed,
    /// A stage was missed; the key's weight was raised and it will be
    /// re-asked next round
    Failed,
    /// The learner quit; persist the table as-is and shut down
    Quit,
}

/// Learner-facing collaborator: ask a question, show a message. The
/// console implements this; tests script it.
pub trait QuizIo {
    /// Print the prompt (when non-empty) and return the learner's reply
    /// line, or `None` when input is exhausted
    fn prompt(&mut self, text: &str) -> Result<Option<String>, Box<dyn Error>>;
    /// Informational text
    fn show(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
    /// Positive feedback
    fn correct(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
    /// Negative feedback
    fn incorrect(&mut self, text: &str) -> Result<(), Box<dyn Error>>;
    /// Render a staff diagram carrying this many accidentals
    fn show_staff(&mut self, family: Family, accidentals: u8) -> Result<(), Box<dyn Error>>;
}

enum StageResult {
    Pass,
    Fail,
    Quit,
}

/// Drives one round of questions over a selected key signature
pub struct QuizSession {
    verbose: bool,
}

impl QuizSession {
    pub fn new(verbose: bool) -> Self {
        QuizSession { verbose }
    }

    /// Run one full round: select a key, drive the stages, apply
    /// reinforcement. Persistence is left to the caller, keyed off the
    /// outcome.
    pub fn run_round<R: Rng, IO: QuizIo>(
        &self,
        rng: &mut R,
        io: &mut IO,
        table: &mut WeightTable,
        selector: &mut Selector,
    ) -> Result<RoundOutcome, Box<dyn Error>> {
        // START
        let (family, key) = selector.choose(rng, table)?;
        if self.verbose {
            io.show(&format!(
                "Relevant {} notes: {}",
                family.word(),
                theory::accidentals_present(family, key)
            ))?;
        }

        // COUNT_OR_STAFF: fair coin between the two first-stage evaluators
        let first = if rng.gen::<bool>() {
            self.ask_count(io, family, key)?
        } else {
            self.ask_staff(io, family, key)?
        };
        match first {
            StageResult::Pass => {}
            StageResult::Fail => {
                ReinforcementPolicy::on_mistake(table, selector, family, key);
                return Ok(RoundOutcome::Failed);
            }
            StageResult::Quit => return Ok(RoundOutcome::Quit),
        }

        // ACCIDENTAL_SPELLING
        match self.ask_letters(io, family, key)? {
            StageResult::Pass => {}
            StageResult::Fail => {
                ReinforcementPolicy::on_mistake(table, selector, family, key);
                return Ok(RoundOutcome::Failed);
            }
            StageResult::Quit => return Ok(RoundOutcome::Quit),
        }

        // SCALE_SPELLING
        match self.ask_scale(io, key)? {
            StageResult::Pass => {}
            StageResult::Fail => {
                ReinforcementPolicy::on_mistake(table, selector, family, key);
                return Ok(RoundOutcome::Failed);
            }
            StageResult::Quit => return Ok(RoundOutcome::Quit),
        }

        // DONE
        ReinforcementPolicy::on_success(table, selector, family, key);
        io.correct(&format!("✓ {} complete!", key.name))?;
        Ok(RoundOutcome::Passed)
    }

    /// "How many accidentals" evaluator. Expects e.g. "2 sharps" for D;
    /// malformed input counts as a wrong answer with guidance.
    fn ask_count<IO: QuizIo>(
        &self,
        io: &mut IO,
        family: Family,
        key: &KeySig,
    ) -> Result<StageResult, Box<dyn Error>> {
        let line = match io.prompt(&format!(
            "{}\nHow many flats or sharps does the key signature above have?",
            key.name
        ))? {
            Some(line) if !answer::is_quit(&line) => line,
            _ => return Ok(StageResult::Quit),
        };

        let expected_sign = family.word_for(key.accidentals);
        match answer::parse_count(&line) {
            Some(parsed) if parsed.count == key.accidentals && parsed.sign == expected_sign => {
                if self.verbose {
                    io.correct(&format!("Number of {}s correct!", family.word()))?;
                }
                Ok(StageResult::Pass)
            }
            Some(_) => {
                io.incorrect(&format!(
                    "Incorrect. Key signature {} has {} {}s.",
                    key.name,
                    key.accidentals,
                    family.word()
                ))?;
                Ok(StageResult::Fail)
            }
            None => {
                io.incorrect("First character of input must be an integer between 0 and 7 inclusive.")?;
                io.show("Key signature D, for example, takes the answer: 2 sharps")?;
                Ok(StageResult::Fail)
            }
        }
    }

    /// "Identify the key from the staff" evaluator
    fn ask_staff<IO: QuizIo>(
        &self,
        io: &mut IO,
        family: Family,
        key: &KeySig,
    ) -> Result<StageResult, Box<dyn Error>> {
        io.show("Which key signature is depicted below?")?;
        io.show_staff(family, key.accidentals)?;
        let line = match io.prompt("")? {
            Some(line) if !answer::is_quit(&line) => line,
            _ => return Ok(StageResult::Quit),
        };

        let name = answer::key_name(&line);
        if name.eq_ignore_ascii_case(key.name) {
            Ok(StageResult::Pass)
        } else {
            io.incorrect(&format!(
                "Incorrect. The answer is {}, not {}.",
                key.name, name
            ))?;
            Ok(StageResult::Fail)
        }
    }

    /// Accidental letters evaluator. Keys with no accidentals succeed
    /// without prompting.
    fn ask_letters<IO: QuizIo>(
        &self,
        io: &mut IO,
        family: Family,
        key: &KeySig,
    ) -> Result<StageResult, Box<dyn Error>> {
        let expected = theory::accidentals_present(family, key);
        if expected.is_empty() {
            return Ok(StageResult::Pass);
        }

        let line = match io.prompt(&format!(
            "Which {}s does this key signature have?",
            family.word()
        ))? {
            Some(line) if !answer::is_quit(&line) => line,
            _ => return Ok(StageResult::Quit),
        };

        if answer::normalize_letters(&line) == expected {
            if self.verbose {
                io.correct("All correct!")?;
            }
            Ok(StageResult::Pass)
        } else {
            io.incorrect(&format!(
                "Remember: Key signature {} has the following {}s:",
                key.name,
                family.word()
            ))?;
            let spaced: Vec<String> = expected.chars().map(String::from).collect();
            io.show(&spaced.join(" "))?;
            Ok(StageResult::Fail)
        }
    }

    /// Major scale spelling evaluator: five tokens, compared by position
    fn ask_scale<IO: QuizIo>(
        &self,
        io: &mut IO,
        key: &KeySig,
    ) -> Result<StageResult, Box<dyn Error>> {
        let line = match io.prompt(&format!(
            "Which notes make up the {} major scale?",
            key.name
        ))? {
            Some(line) if !answer::is_quit(&line) => line,
            _ => return Ok(StageResult::Quit),
        };

        let submitted = answer::note_tokens(&line);
        let expected: Vec<&str> = key.scale.split(' ').collect();
        if answer::matches_scale(&submitted, &expected) {
            if self.verbose {
                io.correct("Major scale correct!")?;
            }
            Ok(StageResult::Pass)
        } else {
            io.incorrect(&format!(
                "Incorrect. The answer should be '{}', not '{}'.",
                key.scale,
                submitted.join(" ")
            ))?;
            Ok(StageResult::Fail)
        }
    }
}
