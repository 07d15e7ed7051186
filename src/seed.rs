use rand::Rng;

use crate::error::GridError;

/// How a [`Grid`](crate::grid::Grid) populates its cells at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SeedPolicy {
    /// Every cell starts dead
    #[default]
    AllDead,

    /// Every cell independently starts alive with probability `p`
    RandomWithProbability(f64),
}

impl SeedPolicy {
    /// Checks that a random policy carries a probability in `[0, 1]`.
    pub fn validate(&self) -> Result<(), GridError> {
        match *self {
            SeedPolicy::AllDead => Ok(()),
            SeedPolicy::RandomWithProbability(p) if (0f64..=1f64).contains(&p) => Ok(()),
            SeedPolicy::RandomWithProbability(p) => Err(GridError::InvalidProbability(p)),
        }
    }

    /// Draw the initial state of one cell.
    ///
    /// `AllDead` never touches `rng`, so an all-dead grid consumes no randomness.
    pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        match *self {
            SeedPolicy::AllDead => false,
            SeedPolicy::RandomWithProbability(p) => rng.random_bool(p),
        }
    }
}
