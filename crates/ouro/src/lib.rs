//! Ouro: a cyclic breed-contest ecosystem simulation on a wrapping grid.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the ouro sub-crates. For most users, adding `ouro` as a single
//! dependency is sufficient.
//!
//! The simulation is generalized rock-paper-scissors: breeds occupy the
//! cells of a square torus, random neighbour contests overwrite the
//! loser with the winner, and because dominance is cyclic no breed can
//! win for good. Populations rise and fall in travelling waves instead
//! of converging.
//!
//! # Quick start
//!
//! ```rust
//! use ouro::prelude::*;
//!
//! // Five breeds on a 16x16 torus, seeded for reproducibility.
//! let arena = Arena::builder()
//!     .num_breeds(5)
//!     .size(16)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! arena.init();
//! arena.advance(2_000);
//!
//! let terrain = arena.snapshot();
//! assert_eq!(terrain.cells().len(), 256);
//! assert!(terrain.cells().iter().all(|b| b.0 < 5));
//! assert_eq!(terrain.census().iter().sum::<usize>(), 256);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ouro-core` | Breeds, directions, the dominance rule, torus math |
//! | [`arena`] | `ouro-arena` | The arena engine, configuration, terrain snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and pure rules (`ouro-core`).
///
/// Contains [`types::Breed`], [`types::Direction`], the cyclic
/// [`types::dominance`] rule, and the [`types::torus`] coordinate
/// helpers. Everything here is side-effect free.
pub use ouro_core as types;

/// The contest engine (`ouro-arena`).
///
/// [`arena::Arena`] owns the grid and its random source,
/// [`arena::Terrain`] is the detached snapshot observers read.
pub use ouro_arena as arena;

/// Common imports for typical ouro usage.
///
/// ```rust
/// use ouro::prelude::*;
/// ```
///
/// This imports the arena, its builder and configuration types, terrain
/// snapshots, and the core breed types.
pub mod prelude {
    // Core types
    pub use ouro_core::{Breed, Direction, Outcome};

    // Engine
    pub use ouro_arena::{Arena, ArenaBuilder, ArenaConfig, ConfigError, Terrain};
}
