//! Core types for the ouro arena simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the breed identifier, the four cardinal directions, the cyclic
//! dominance rule that decides contests, and the toroidal coordinate
//! arithmetic of the square grid. The engine itself lives in
//! `ouro-arena`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod breed;
pub mod direction;
pub mod dominance;
pub mod torus;

pub use breed::Breed;
pub use direction::Direction;
pub use dominance::Outcome;
