//! Music Theory: Key signature reference data and answer normalization
//!
//! # Components
//! - `catalog.rs`: Families, accidental counts/cycles, scale spellings
//! - `answer.rs`: Free-text answer normalization rules

pub mod answer;
pub mod catalog;

pub use catalog::{accidentals_present, keys, Family, KeySig, FLAT_KEYS, SHARP_KEYS};
