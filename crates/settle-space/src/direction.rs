//! The four axis-aligned stencil directions.

/// One of the four axis-aligned neighbor directions.
///
/// [`Direction::ALL`] lists the variants in stencil argument order:
/// right, up, left, down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Same row, next column.
    Right,
    /// Previous row, same column.
    Up,
    /// Same row, previous column.
    Left,
    /// Next row, same column.
    Down,
}

impl Direction {
    /// All four directions in stencil argument order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    /// The `(row, col)` offset this direction adds to a coordinate.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (0, 1),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
        }
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert_eq!(dr.abs() + dc.abs(), 1);
        }
    }

    #[test]
    fn opposite_negates_offset() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let (or, oc) = dir.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }
}
