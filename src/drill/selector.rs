//! Weighted draw of the next key signature
//!
//! A pending repeat override (set after a mistake) wins unconditionally;
//! otherwise a fair coin picks the family and the key is sampled in
//! proportion to its weight. Randomness is injected so tests run seeded.

use crate::drill::weights::{WeightTable, MIN_WEIGHT};
use crate::theory::{self, Family, KeySig};
use rand::seq::SliceRandom;
use rand::Rng;
use std::error::Error;

/// Picks the key signature for the next round
#[derive(Debug, Default)]
pub struct Selector {
    /// Key forced by the previous round's mistake, if any
    repeat_override: Option<(Family, &'static KeySig)>,
}

impl Selector {
    pub fn new() -> Self {
        Selector {
            repeat_override: None,
        }
    }

    /// Force the next draw to re-ask this key
    pub fn set_repeat(&mut self, family: Family, key: &'static KeySig) {
        self.repeat_override = Some((family, key));
    }

    pub fn clear_repeat(&mut self) {
        self.repeat_override = None;
    }

    pub fn has_repeat(&self) -> bool {
        self.repeat_override.is_some()
    }

    /// Draw the next (family, key) pair. The override, when present, is
    /// returned as-is without consuming randomness, so a missed key is
    /// re-asked deterministically.
    pub fn choose<R: Rng>(
        &mut self,
        rng: &mut R,
        table: &WeightTable,
    ) -> Result<(Family, &'static KeySig), Box<dyn Error>> {
        if let Some((family, key)) = self.repeat_override {
            return Ok((family, key));
        }

        let family = *Family::BOTH
            .choose(rng)
            .ok_or("no accidental families to choose from")?;
        // Clamp at the floor so sampling never sees a zero weight
        let key = theory::keys(family)
            .choose_weighted(rng, |k| table.weight(family, k.name).max(MIN_WEIGHT))?;
        Ok((family, key))
    }
}
