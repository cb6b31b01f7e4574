//! Benchmark profiles and utilities for the ouro simulation.
//!
//! Provides pre-built [`ArenaConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: the classic 50x50 three-breed setup
//! - [`stress_profile`]: 200x200 grid with eight breeds
//!
//! Both profiles carry a seeded random source so benchmark runs are
//! comparable across machines and invocations.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ouro_arena::ArenaConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the reference benchmark profile: 50x50 grid, 3 breeds.
///
/// Matches the default arena configuration apart from the seeded
/// random source.
pub fn reference_profile(seed: u64) -> ArenaConfig {
    ArenaConfig {
        num_breeds: 3,
        size: 50,
        rng: Some(ChaCha8Rng::seed_from_u64(seed)),
    }
}

/// Build the stress benchmark profile: 200x200 grid (40K cells), 8 breeds.
///
/// Sixteen times the reference cell count, with an even breed count so
/// equidistant contests also show up in the profile.
pub fn stress_profile(seed: u64) -> ArenaConfig {
    ArenaConfig {
        num_breeds: 8,
        size: 200,
        rng: Some(ChaCha8Rng::seed_from_u64(seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ouro_arena::Arena;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn reference_profile_is_reproducible() {
        let a = Arena::new(reference_profile(42)).unwrap();
        let b = Arena::new(reference_profile(42)).unwrap();
        a.init();
        b.init();
        a.advance(1_000);
        b.advance(1_000);
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
