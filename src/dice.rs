//! Pluggable dice sources.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A nonblocking, deterministic-when-seeded integer generator in `1..=6`.
pub trait DiceSource {
    fn next(&mut self) -> u8;
}

/// Seeded pseudo-random dice, for reproducible-but-varied races.
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for SeededDice {
    fn next(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

/// An exact, exhausted-once sequence — the test double used to drive the
/// concrete scenarios.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    remaining: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            remaining: rolls.into_iter().collect(),
        }
    }
}

impl DiceSource for ScriptedDice {
    fn next(&mut self) -> u8 {
        self.remaining
            .pop_front()
            .expect("ScriptedDice exhausted before the race finished")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_dice_returns_rolls_in_order() {
        let mut dice = ScriptedDice::new([1, 2, 3]);
        assert_eq!(dice.next(), 1);
        assert_eq!(dice.next(), 2);
        assert_eq!(dice.next(), 3);
    }

    #[test]
    fn seeded_dice_is_deterministic_for_a_given_seed() {
        let mut a = SeededDice::new(42);
        let mut b = SeededDice::new(42);
        let rolls_a: Vec<u8> = (0..20).map(|_| a.next()).collect();
        let rolls_b: Vec<u8> = (0..20).map(|_| b.next()).collect();
        assert_eq!(rolls_a, rolls_b);
        assert!(rolls_a.iter().all(|&r| (1..=6).contains(&r)));
    }
}
