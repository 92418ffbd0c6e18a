//! Key Signature Trainer - adaptive music theory drills
//!
//! Quizzes key signatures in three stages (accidental count or staff
//! reading, accidental spelling, scale spelling). Missed keys come back
//! immediately and get sampled more often; mastered keys fade. Progress
//! persists across sessions in a small weight table.

mod cli;
mod drill;
mod theory;

use clap::Parser;
use cli::Console;
use drill::{QuizSession, RoundOutcome, Selector, WeightStore};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(name = "Key Signature Trainer")]
#[command(about = "Adaptive key signature drills")]
struct Args {
    /// Path to the saved weight table
    #[arg(short, long, default_value = "cache/weights.json")]
    store: String,

    /// Show the relevant accidentals and per-stage confirmations
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("🎼 Key Signature Trainer v0.1.0");
    println!("Answer 'q' at any prompt to save and exit.");

    let store = WeightStore::new(&args.store);
    let (mut table, loaded) = store.load();
    if loaded {
        println!("[Previous performance loaded from memory.]");
    }

    let session = QuizSession::new(args.verbose);
    let mut selector = Selector::new();
    let mut io = Console::new();
    let mut rng = rand::thread_rng();

    loop {
        println!();
        match session.run_round(&mut rng, &mut io, &mut table, &mut selector)? {
            RoundOutcome::Passed => {
                if let Err(e) = store.save(&table) {
                    eprintln!("⚠ Could not save progress: {}", e);
                }
            }
            RoundOutcome::Failed => {
                // Weights already adjusted; the key comes back next round
            }
            RoundOutcome::Quit => {
                if let Err(e) = store.save(&table) {
                    eprintln!("⚠ Could not save progress: {}", e);
                }
                println!("Exiting program.");
                break;
            }
        }
    }

    Ok(())
}
