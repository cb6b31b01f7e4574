//! Coordinate arithmetic on a square grid with wrapping edges.
//!
//! The arena's grid is a torus: stepping off any edge re-enters from
//! the opposite edge, so every cell has exactly four neighbours and no
//! position is special. All helpers here are pure functions over
//! `(row, col)` pairs; the grid itself lives in the arena crate.

use crate::direction::Direction;

/// Normalize a possibly out-of-range axis value into `[0, size)`.
///
/// Accepts any signed value, so callers can offset a coordinate by a
/// direction step (or several) and wrap the result in one call.
/// `size` must be at least 1 and no larger than `i32::MAX`.
pub fn wrap(value: i32, size: u32) -> u32 {
    debug_assert!(size >= 1, "size must be >= 1");
    debug_assert!(size <= i32::MAX as u32, "size {size} exceeds i32 range");
    // rem_euclid keeps the result non-negative for negative inputs.
    value.rem_euclid(size as i32) as u32
}

/// Step one cell from `(row, col)` in `direction`, wrapping at edges.
///
/// Both coordinates must already lie in `[0, size)`.
pub fn neighbour(row: u32, col: u32, direction: Direction, size: u32) -> (u32, u32) {
    debug_assert!(row < size && col < size, "({row}, {col}) out of bounds for size {size}");
    (
        wrap(row as i32 + direction.row_offset(), size),
        wrap(col as i32 + direction.col_offset(), size),
    )
}

/// Row-major rank of `(row, col)` in a flat cell buffer.
pub fn index(row: u32, col: u32, size: u32) -> usize {
    debug_assert!(row < size && col < size, "({row}, {col}) out of bounds for size {size}");
    row as usize * size as usize + col as usize
}
