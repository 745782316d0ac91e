//! Seeded RNG for spawn placement
//!
//! Wraps `Pcg32` so the whole game is reproducible from a single `u64` seed.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{FALL_SPEED_MIN, FALL_SPEED_SPREAD};

/// Deterministic dice for the simulation
#[derive(Debug, Clone)]
pub struct GameRng {
    seed: u64,
    rng: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed this instance was created with, for logging.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[0, max_exclusive)`.
    pub fn roll(&mut self, max_exclusive: i32) -> i32 {
        debug_assert!(max_exclusive > 0);
        self.rng.random_range(0..max_exclusive)
    }

    /// Uniform integer in `[min, max]` inclusive.
    pub fn roll_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        self.rng.random_range(min..=max)
    }

    /// Downward fall speed for a fresh hazard, units per frame.
    pub fn fall_speed(&mut self) -> f32 {
        FALL_SPEED_MIN + self.rng.random_range(0.0..FALL_SPEED_SPREAD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.roll(720);
            assert!((0..720).contains(&v));

            let r = rng.roll_range(-25, 25);
            assert!((-25..=25).contains(&r));

            let s = rng.fall_speed();
            assert!((FALL_SPEED_MIN..FALL_SPEED_MIN + FALL_SPEED_SPREAD).contains(&s));
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(99999);
        let mut b = GameRng::new(99999);
        for _ in 0..100 {
            assert_eq!(a.roll(1000), b.roll(1000));
        }
        assert_eq!(a.seed(), b.seed());
    }
}
