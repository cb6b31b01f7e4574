//! Point-in-time copies of the arena grid.
//!
//! A [`Terrain`] is a detached snapshot: reading it never touches the
//! arena lock, and the arena advancing never changes it. Snapshots from
//! different moments can therefore be compared freely, which is how the
//! population census below is meant to be used.

use std::fmt;

use ouro_core::torus;
use ouro_core::Breed;

/// An immutable snapshot of the arena grid.
///
/// Produced by [`Arena::snapshot()`](crate::Arena::snapshot). Cells are
/// stored row-major; `(0, 0)` is the north-west corner.
#[derive(Clone, PartialEq, Eq)]
pub struct Terrain {
    size: u32,
    num_breeds: u8,
    cells: Vec<Breed>,
}

impl Terrain {
    /// Invariants: `size >= 1` and `cells.len() == size * size`, both
    /// guaranteed by the arena's validated config.
    pub(crate) fn new(size: u32, num_breeds: u8, cells: Vec<Breed>) -> Self {
        debug_assert_eq!(cells.len(), (size as usize).pow(2));
        Self {
            size,
            num_breeds,
            cells,
        }
    }

    /// Edge length of the snapshotted grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of breeds the arena was configured with.
    pub fn num_breeds(&self) -> u8 {
        self.num_breeds
    }

    /// Total number of cells, `size * size`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Breed occupying `(row, col)` at snapshot time.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `[0, size)`.
    pub fn get(&self, row: u32, col: u32) -> Breed {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) out of bounds for size {}",
            self.size
        );
        self.cells[torus::index(row, col, self.size)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Breed] {
        &self.cells
    }

    /// Iterate over the grid one row at a time, north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[Breed]> {
        self.cells.chunks(self.size as usize)
    }

    /// Population count per breed.
    ///
    /// Index `b` holds the number of cells occupied by breed `b`; the
    /// counts always sum to `size * size`.
    pub fn census(&self) -> Vec<usize> {
        let mut counts = vec![0usize; usize::from(self.num_breeds)];
        for cell in &self.cells {
            counts[usize::from(cell.0)] += 1;
        }
        counts
    }
}

impl fmt::Debug for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terrain")
            .field("size", &self.size)
            .field("num_breeds", &self.num_breeds)
            .field("cells", &self.cells.len())
            .finish()
    }
}
