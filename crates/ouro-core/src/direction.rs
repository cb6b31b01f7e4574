//! Cardinal directions on the arena grid.

use rand::Rng;

/// One of the four orthogonal neighbour directions.
///
/// Offsets are in `(row, column)` terms with row 0 at the top: `North`
/// is one row up, `South` one row down, `East` one column right, `West`
/// one column left. Each contest pairs a challenger cell with the
/// neighbour one step away in a uniformly drawn direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up: offset `(-1, 0)`.
    North,
    /// One column right: offset `(0, 1)`.
    East,
    /// One row down: offset `(1, 0)`.
    South,
    /// One column left: offset `(0, -1)`.
    West,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Row offset of one step in this direction.
    pub fn row_offset(self) -> i32 {
        match self {
            Self::North => -1,
            Self::South => 1,
            Self::East | Self::West => 0,
        }
    }

    /// Column offset of one step in this direction.
    pub fn col_offset(self) -> i32 {
        match self {
            Self::East => 1,
            Self::West => -1,
            Self::North | Self::South => 0,
        }
    }

    /// Draw one of the four directions, each with probability 1/4.
    pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn offsets_match_compass() {
        assert_eq!(
            (Direction::North.row_offset(), Direction::North.col_offset()),
            (-1, 0)
        );
        assert_eq!(
            (Direction::East.row_offset(), Direction::East.col_offset()),
            (0, 1)
        );
        assert_eq!(
            (Direction::South.row_offset(), Direction::South.col_offset()),
            (1, 0)
        );
        assert_eq!(
            (Direction::West.row_offset(), Direction::West.col_offset()),
            (0, -1)
        );
    }

    #[test]
    fn every_offset_is_a_unit_step() {
        for d in Direction::ALL {
            let manhattan = d.row_offset().abs() + d.col_offset().abs();
            assert_eq!(manhattan, 1, "{d:?} is not a unit step");
        }
    }

    #[test]
    fn pick_reaches_every_direction() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 4];
        for _ in 0..1000 {
            let d = Direction::pick(&mut rng);
            let i = Direction::ALL.iter().position(|&x| x == d).unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true; 4], "1000 draws should hit all 4 directions");
    }
}
