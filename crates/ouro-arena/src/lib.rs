//! Contest engine for the ouro ecosystem simulation.
//!
//! This crate owns the mutable side of the simulation: the [`Arena`]
//! holds the breed grid and its random source behind one lock, runs
//! randomized neighbour contests, and hands out detached [`Terrain`]
//! snapshots for observers.
//!
//! # Construction
//!
//! Arenas are configured through [`ArenaConfig`] or, more commonly, the
//! chained [`ArenaBuilder`]:
//!
//! ```
//! use ouro_arena::Arena;
//!
//! let arena = Arena::builder()
//!     .num_breeds(5)
//!     .size(32)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! arena.init();
//! arena.advance(10_000);
//! let terrain = arena.snapshot();
//! assert_eq!(terrain.census().iter().sum::<usize>(), 32 * 32);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod terrain;

pub use arena::{Arena, ArenaBuilder};
pub use config::{ArenaConfig, ConfigError, DEFAULT_NUM_BREEDS, DEFAULT_SIZE, MAX_SIZE};
pub use terrain::Terrain;
