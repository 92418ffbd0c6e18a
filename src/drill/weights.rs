//! Per-key sampling weights and reinforcement
//!
//! Maintains:
//! - One weight map per accidental family (key name -> positive weight)
//! - Default distribution for first runs
//! - The asymmetric mistake/success adjustments

use crate::drill::selector::Selector;
use crate::theory::{self, Family, KeySig};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Floor that keeps repeated halving from ever reaching zero
pub const MIN_WEIGHT: f64 = 1e-9;

/// Starting weight for the 7-accidental key of each family (C#, Cb):
/// rare in practice, so quizzed less until missed
const RARE_KEY_WEIGHT: f64 = 0.5;

const MISTAKE_FACTOR: f64 = 5.0;
const SUCCESS_DIVISOR: f64 = 2.0;

/// Sampling weights for every key signature, kept separately per family
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    sharp: FxHashMap<String, f64>,
    flat: FxHashMap<String, f64>,
}

impl WeightTable {
    /// The first-run distribution: 1.0 everywhere except the rarest key
    /// of each family
    pub fn defaults() -> Self {
        let mut table = WeightTable {
            sharp: FxHashMap::default(),
            flat: FxHashMap::default(),
        };
        for family in Family::BOTH {
            for key in theory::keys(family) {
                let weight = if key.accidentals == 7 {
                    RARE_KEY_WEIGHT
                } else {
                    1.0
                };
                table.family_mut(family).insert(key.name.to_string(), weight);
            }
        }
        table
    }

    fn family(&self, family: Family) -> &FxHashMap<String, f64> {
        match family {
            Family::Sharp => &self.sharp,
            Family::Flat => &self.flat,
        }
    }

    fn family_mut(&mut self, family: Family) -> &mut FxHashMap<String, f64> {
        match family {
            Family::Sharp => &mut self.sharp,
            Family::Flat => &mut self.flat,
        }
    }

    /// Weight for a key, with the floor as fallback for absent entries
    pub fn weight(&self, family: Family, key: &str) -> f64 {
        self.family(family).get(key).copied().unwrap_or(MIN_WEIGHT)
    }

    pub fn set_weight(&mut self, family: Family, key: &str, weight: f64) {
        self.family_mut(family).insert(key.to_string(), weight);
    }

    /// True when every catalog key has a strictly positive, finite
    /// weight. Loaded state failing this is discarded for defaults.
    pub fn is_complete(&self) -> bool {
        Family::BOTH.iter().all(|&family| {
            theory::keys(family).iter().all(|key| {
                self.family(family)
                    .get(key.name)
                    .map(|&w| w.is_finite() && w > 0.0)
                    .unwrap_or(false)
            })
        })
    }
}

/// Asymmetric weight adjustment: a missed key resurfaces fast (x5 and an
/// immediate re-ask), a mastered key retires slowly (/2, floored)
pub struct ReinforcementPolicy;

impl ReinforcementPolicy {
    /// Penalize a missed key and queue it for the next draw
    pub fn on_mistake(
        table: &mut WeightTable,
        selector: &mut Selector,
        family: Family,
        key: &'static KeySig,
    ) {
        let weight = table.weight(family, key.name);
        table.set_weight(family, key.name, weight * MISTAKE_FACTOR);
        selector.set_repeat(family, key);
    }

    /// Reward a fully answered key and clear any pending re-ask.
    /// Persistence is the caller's next step.
    pub fn on_success(
        table: &mut WeightTable,
        selector: &mut Selector,
        family: Family,
        key: &'static KeySig,
    ) {
        let weight = table.weight(family, key.name);
        table.set_weight(family, key.name, (weight / SUCCESS_DIVISOR).max(MIN_WEIGHT));
        selector.clear_repeat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn defaults_are_complete_with_rare_keys_halved() {
        let table = WeightTable::defaults();
        assert!(table.is_complete());
        assert_eq!(table.weight(Family::Sharp, "C#"), 0.5);
        assert_eq!(table.weight(Family::Flat, "Cb"), 0.5);
        assert_eq!(table.weight(Family::Sharp, "D"), 1.0);
    }

    #[test]
    fn mistake_multiplies_and_success_halves() {
        let mut table = WeightTable::defaults();
        let mut selector = Selector::new();
        let key = &theory::SHARP_KEYS[2]; // D

        ReinforcementPolicy::on_mistake(&mut table, &mut selector, Family::Sharp, key);
        assert_eq!(table.weight(Family::Sharp, "D"), 5.0);
        assert!(selector.has_repeat());

        ReinforcementPolicy::on_success(&mut table, &mut selector, Family::Sharp, key);
        assert_eq!(table.weight(Family::Sharp, "D"), 2.5);
        assert!(!selector.has_repeat());
    }

    #[test]
    fn weights_stay_positive_under_random_reinforcement() {
        let mut table = WeightTable::defaults();
        let mut selector = Selector::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let family = if rng.gen::<bool>() {
                Family::Sharp
            } else {
                Family::Flat
            };
            let keys = theory::keys(family);
            let key = &keys[rng.gen_range(0..keys.len())];
            if rng.gen::<bool>() {
                ReinforcementPolicy::on_mistake(&mut table, &mut selector, family, key);
            } else {
                ReinforcementPolicy::on_success(&mut table, &mut selector, family, key);
            }
        }

        for family in Family::BOTH {
            for key in theory::keys(family) {
                let weight = table.weight(family, key.name);
                assert!(weight > 0.0, "{} collapsed to {}", key.name, weight);
                assert!(weight.is_finite());
            }
        }
    }

    #[test]
    fn incomplete_or_invalid_tables_are_detected() {
        let mut table = WeightTable::defaults();
        table.set_weight(Family::Flat, "Eb", 0.0);
        assert!(!table.is_complete());

        let mut table = WeightTable::defaults();
        table.set_weight(Family::Sharp, "G", f64::NAN);
        assert!(!table.is_complete());
    }
}
