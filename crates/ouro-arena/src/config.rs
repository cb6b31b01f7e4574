//! Arena configuration, validation, and error types.
//!
//! [`ArenaConfig`] is the input for constructing an [`Arena`](crate::Arena).
//! [`validate()`](ArenaConfig::validate) checks structural invariants up
//! front, so a constructed arena never has to re-check them while the
//! simulation runs.

use std::error::Error;
use std::fmt;

use rand_chacha::ChaCha8Rng;

/// Default number of breeds: classic rock-paper-scissors.
pub const DEFAULT_NUM_BREEDS: u8 = 3;

/// Default edge length of the arena grid.
pub const DEFAULT_SIZE: u32 = 50;

/// Largest supported edge length.
///
/// This is the largest `size` whose cell count `size * size` still fits
/// in an `i32`, which keeps flat cell ranks comfortably inside every
/// integer type the engine touches.
pub const MAX_SIZE: u32 = 46_340;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ArenaConfig::validate()`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `num_breeds` is zero; contests need at least one breed.
    NoBreeds,
    /// `size` is zero; the grid would have no cells.
    EmptyArena,
    /// `size` exceeds [`MAX_SIZE`].
    SizeTooLarge {
        /// The configured size that was too large.
        value: u32,
        /// The maximum supported size.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBreeds => write!(f, "num_breeds must be at least 1"),
            Self::EmptyArena => write!(f, "size must be at least 1"),
            Self::SizeTooLarge { value, max } => {
                write!(f, "size {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ArenaConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing an arena.
///
/// The defaults reproduce the classic setup: three breeds on a 50x50
/// torus with a freshly seeded random source. Most callers go through
/// [`Arena::builder()`](crate::Arena::builder) rather than filling this
/// in by hand.
#[derive(Clone)]
pub struct ArenaConfig {
    /// Number of breeds competing in the arena. Default: 3.
    pub num_breeds: u8,
    /// Edge length of the square grid. Default: 50.
    pub size: u32,
    /// Random source driving initialization and contests. `None` seeds
    /// a fresh generator from system entropy at construction.
    pub rng: Option<ChaCha8Rng>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            num_breeds: DEFAULT_NUM_BREEDS,
            size: DEFAULT_SIZE,
            rng: None,
        }
    }
}

impl ArenaConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one breed, so random breed selection has a
        //    non-empty range.
        if self.num_breeds == 0 {
            return Err(ConfigError::NoBreeds);
        }
        // 2. At least one cell, so contest site selection has a
        //    non-empty range.
        if self.size == 0 {
            return Err(ConfigError::EmptyArena);
        }
        // 3. Cell count must stay within i32 (flat ranks and wrapped
        //    coordinate arithmetic rely on it).
        if self.size > MAX_SIZE {
            return Err(ConfigError::SizeTooLarge {
                value: self.size,
                max: MAX_SIZE,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for ArenaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaConfig")
            .field("num_breeds", &self.num_breeds)
            .field("size", &self.size)
            .field("rng", if self.rng.is_some() { &"supplied" } else { &"fresh" })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn validate_default_succeeds() {
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_breeds_fails() {
        let cfg = ArenaConfig {
            num_breeds: 0,
            ..ArenaConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::NoBreeds) => {}
            other => panic!("expected NoBreeds, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_size_fails() {
        let cfg = ArenaConfig {
            size: 0,
            ..ArenaConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::EmptyArena) => {}
            other => panic!("expected EmptyArena, got {other:?}"),
        }
    }

    #[test]
    fn validate_oversized_grid_fails() {
        let cfg = ArenaConfig {
            size: MAX_SIZE + 1,
            ..ArenaConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::SizeTooLarge { value, max }) => {
                assert_eq!(value, MAX_SIZE + 1);
                assert_eq!(max, MAX_SIZE);
            }
            other => panic!("expected SizeTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn validate_extreme_but_legal_corners_succeed() {
        let cfg = ArenaConfig {
            num_breeds: u8::MAX,
            size: MAX_SIZE,
            rng: None,
        };
        assert!(cfg.validate().is_ok());

        let cfg = ArenaConfig {
            num_breeds: 1,
            size: 1,
            rng: None,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn debug_reports_rng_provenance_not_state() {
        let fresh = format!("{:?}", ArenaConfig::default());
        assert!(fresh.contains("fresh"));

        let cfg = ArenaConfig {
            rng: Some(ChaCha8Rng::seed_from_u64(7)),
            ..ArenaConfig::default()
        };
        let supplied = format!("{cfg:?}");
        assert!(supplied.contains("supplied"));
    }

    #[test]
    fn size_too_large_error_display() {
        let err = ConfigError::SizeTooLarge {
            value: 50_000,
            max: MAX_SIZE,
        };
        let msg = format!("{err}");
        assert!(msg.contains("50000"));
        assert!(msg.contains("46340"));
    }
}
