//! Sources of the uniform draw behind each shot.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Produces uniform samples in `[0, 1)`.
pub trait DrawSource {
    fn draw(&mut self) -> f64;
}

/// Draws from a seeded `StdRng`.
pub struct SeededDraws {
    rng: StdRng,
}

impl SeededDraws {
    pub fn new(seed: u64) -> Self {
        SeededDraws {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        SeededDraws {
            rng: StdRng::from_entropy(),
        }
    }
}

impl DrawSource for SeededDraws {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of samples, then keeps returning the largest
/// value below 1.0.
pub struct ScriptedDraws {
    values: VecDeque<f64>,
}

impl ScriptedDraws {
    /// Largest sample a `DrawSource` may return; survives every shot
    /// except the last chamber.
    pub const SURVIVE: f64 = 1.0 - f64::EPSILON;
    /// Smallest sample; always below the elimination chance.
    pub const DIE: f64 = 0.0;

    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        ScriptedDraws {
            values: values.into_iter().collect(),
        }
    }
}

impl DrawSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(Self::SURVIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_draws_are_reproducible_and_in_range() {
        let mut a = SeededDraws::new(7);
        let mut b = SeededDraws::new(7);
        for _ in 0..100 {
            let x = a.draw();
            assert_eq!(x, b.draw());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn scripted_draws_replay_then_fall_back() {
        let mut draws = ScriptedDraws::new([0.25, 0.5]);
        assert_eq!(draws.draw(), 0.25);
        assert_eq!(draws.draw(), 0.5);
        assert_eq!(draws.draw(), ScriptedDraws::SURVIVE);
        assert!(ScriptedDraws::SURVIVE < 1.0);
    }
}
