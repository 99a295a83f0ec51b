use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const MIN_STEP: u8 = 3;
pub const MAX_STEP: u8 = 7;

/// Source of the simulator's two random draws.
pub trait Entropy {
    /// Progress increment, expected in `MIN_STEP..=MAX_STEP`.
    fn progress_step(&mut self) -> u8;

    /// Outcome of the completion step.
    fn succeeds(&mut self, probability: f64) -> bool;
}

/// Process-wide thread RNG. Used by the window.
#[derive(Debug, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn progress_step(&mut self) -> u8 {
        rand::rng().random_range(MIN_STEP..=MAX_STEP)
    }

    fn succeeds(&mut self, probability: f64) -> bool {
        rand::rng().random_bool(probability.clamp(0.0, 1.0))
    }
}

/// Reproducible draws for `--seed` runs.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Entropy for SeededEntropy {
    fn progress_step(&mut self) -> u8 {
        self.rng.random_range(MIN_STEP..=MAX_STEP)
    }

    fn succeeds(&mut self, probability: f64) -> bool {
        self.rng.random_bool(probability.clamp(0.0, 1.0))
    }
}

/// Fixed sequence of draws. Once exhausted it steps by `MIN_STEP` and
/// reports success.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedEntropy {
    steps: std::collections::VecDeque<u8>,
    outcomes: std::collections::VecDeque<bool>,
}

#[cfg(test)]
impl ScriptedEntropy {
    pub fn new(steps: impl IntoIterator<Item = u8>, outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            outcomes: outcomes.into_iter().collect(),
        }
    }

    pub fn succeeding() -> Self {
        Self::new([], [true])
    }

    pub fn failing() -> Self {
        Self::new([], [false])
    }
}

#[cfg(test)]
impl Entropy for ScriptedEntropy {
    fn progress_step(&mut self) -> u8 {
        self.steps.pop_front().unwrap_or(MIN_STEP)
    }

    fn succeeds(&mut self, _probability: f64) -> bool {
        self.outcomes.pop_front().unwrap_or(true)
    }
}
