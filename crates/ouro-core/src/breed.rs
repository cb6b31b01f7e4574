//! The breed identifier type.

use rand::Rng;
use std::fmt;

/// Identifies one of the N cyclically-ordered species in an arena.
///
/// Breeds are plain small integers in `[0, num_breeds)`. A `Breed`
/// carries no behavior of its own; the dominance relation between two
/// breeds is computed from their values and the total breed count (see
/// [`crate::dominance`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Breed(pub u8);

impl Breed {
    /// Draw a uniformly random breed in `[0, num_breeds)`.
    ///
    /// `num_breeds` must be at least 1. Every validly constructed arena
    /// guarantees this before sampling.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R, num_breeds: u8) -> Self {
        debug_assert!(num_breeds >= 1, "num_breeds must be >= 1");
        Self(rng.random_range(0..num_breeds))
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Breed {
    fn from(v: u8) -> Self {
        Self(v)
    }
}
