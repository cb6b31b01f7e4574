//! The arena itself: grid ownership, contest scheduling, snapshots.

use std::fmt;
use std::sync::Mutex;

use ouro_core::dominance::{self, Outcome};
use ouro_core::{torus, Breed, Direction};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{ArenaConfig, ConfigError};
use crate::terrain::Terrain;

/// Everything the lock protects.
///
/// The random source lives with the cells so every draw is serialized
/// with the grid mutation it feeds. Two threads advancing the same
/// arena interleave whole contests, never halves of one.
struct ArenaState {
    cells: Vec<Breed>,
    rng: ChaCha8Rng,
}

/// An ecosystem simulation on a square torus.
///
/// Each cell holds one breed. A contest picks a random cell (the
/// challenger) and a random cardinal neighbour (the defender), resolves
/// the pair with [`dominance::resolve`], and overwrites the loser with
/// the winner's breed. Run enough contests and breed populations chase
/// each other in waves across the grid.
///
/// The arena is safe to share across threads behind an `Arc`: all cell
/// and RNG access goes through one internal mutex, and [`advance`]
/// re-acquires it for every single contest, so concurrent callers of
/// [`snapshot`] observe the grid between contests rather than waiting
/// out a whole batch.
///
/// Supplying a seeded random source via the [builder](Arena::builder)
/// makes a single-threaded run fully reproducible. With concurrent
/// writers the contest sequence depends on lock acquisition order.
///
/// [`advance`]: Arena::advance
/// [`snapshot`]: Arena::snapshot
pub struct Arena {
    num_breeds: u8,
    size: u32,
    state: Mutex<ArenaState>,
}

// Compile-time assertion: Arena must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Arena>();
};

impl Arena {
    /// Construct an arena from a validated configuration.
    ///
    /// Every cell starts as breed 0; call [`init`](Arena::init) to
    /// randomize the population. When no random source is supplied the
    /// arena seeds its own from system entropy.
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ArenaConfig {
            num_breeds,
            size,
            rng,
        } = config;
        let rng = rng.unwrap_or_else(|| ChaCha8Rng::from_rng(&mut rand::rng()));
        let cells = vec![Breed(0); (size as usize).pow(2)];
        Ok(Self {
            num_breeds,
            size,
            state: Mutex::new(ArenaState { cells, rng }),
        })
    }

    /// Create a builder preloaded with the default configuration.
    pub fn builder() -> ArenaBuilder {
        ArenaBuilder {
            config: ArenaConfig::default(),
        }
    }

    /// Number of breeds competing in this arena.
    pub fn num_breeds(&self) -> u8 {
        self.num_breeds
    }

    /// Edge length of the grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells, `size * size`.
    pub fn cell_count(&self) -> usize {
        (self.size as usize).pow(2)
    }

    /// Repopulate every cell with a uniformly random breed.
    ///
    /// The whole fill happens under one lock acquisition, so a
    /// concurrent [`snapshot`](Arena::snapshot) sees either the old
    /// grid or the new one, never a half-initialized mix.
    pub fn init(&self) {
        let mut state = self.state.lock().unwrap();
        let ArenaState { cells, rng } = &mut *state;
        for cell in cells.iter_mut() {
            *cell = Breed::pick(rng, self.num_breeds);
        }
    }

    /// Run `iterations` contests. Zero iterations is a no-op.
    ///
    /// The lock is taken per contest, not per batch, so long runs never
    /// starve concurrent snapshotters or other advancing threads for
    /// more than a single contest.
    pub fn advance(&self, iterations: u64) {
        for _ in 0..iterations {
            let mut state = self.state.lock().unwrap();
            self.contest(&mut state);
        }
    }

    /// Copy the current grid into a detached [`Terrain`].
    pub fn snapshot(&self) -> Terrain {
        let state = self.state.lock().unwrap();
        Terrain::new(self.size, self.num_breeds, state.cells.clone())
    }

    /// One contest: random challenger cell, random neighbouring
    /// defender, loser overwritten by the winner's breed.
    fn contest(&self, state: &mut ArenaState) {
        let ArenaState { cells, rng } = state;
        let row = rng.random_range(0..self.size);
        let col = rng.random_range(0..self.size);
        let direction = Direction::pick(rng);
        let (defender_row, defender_col) = torus::neighbour(row, col, direction, self.size);

        let challenger_idx = torus::index(row, col, self.size);
        let defender_idx = torus::index(defender_row, defender_col, self.size);
        let challenger = cells[challenger_idx];
        let defender = cells[defender_idx];

        match dominance::resolve(challenger, defender, self.num_breeds) {
            Outcome::ChallengerWins => cells[defender_idx] = challenger,
            Outcome::DefenderWins => cells[challenger_idx] = defender,
            Outcome::Tie => {}
        }
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("num_breeds", &self.num_breeds)
            .field("size", &self.size)
            .finish()
    }
}

// ── ArenaBuilder ───────────────────────────────────────────────────

/// Builder for [`Arena`].
///
/// All settings have defaults: three breeds, a 50x50 grid, and a fresh
/// entropy-seeded random source.
#[derive(Debug)]
pub struct ArenaBuilder {
    config: ArenaConfig,
}

impl ArenaBuilder {
    /// Set the number of breeds (default: 3).
    pub fn num_breeds(mut self, num_breeds: u8) -> Self {
        self.config.num_breeds = num_breeds;
        self
    }

    /// Set the edge length of the grid (default: 50).
    pub fn size(mut self, size: u32) -> Self {
        self.config.size = size;
        self
    }

    /// Supply the random source driving the simulation.
    ///
    /// Later calls to `rng` or [`seed`](ArenaBuilder::seed) replace
    /// earlier ones.
    pub fn rng(mut self, rng: ChaCha8Rng) -> Self {
        self.config.rng = Some(rng);
        self
    }

    /// Shorthand for [`rng`](ArenaBuilder::rng) with a seeded source,
    /// for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.rng = Some(ChaCha8Rng::seed_from_u64(seed));
        self
    }

    /// Build the arena, validating the configuration.
    pub fn build(self) -> Result<Arena, ConfigError> {
        Arena::new(self.config)
    }
}

impl Default for ArenaBuilder {
    fn default() -> Self {
        Arena::builder()
    }
}
