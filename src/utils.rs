use std::ops::Add;

/// A signed grid coordinate, so that neighbor offsets may step outside the grid.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

/// Offsets of the moore neighborhood, the center excluded.
pub fn neighbor_offsets() -> impl Iterator<Item = Pos> {
    (-1..=1)
        .flat_map(|row| (-1..=1).map(move |col| pos!(row, col)))
        .filter(|offset| *offset != Pos::default())
}

#[test]
fn test_neighbor_offsets() {
    let offsets: Vec<_> = neighbor_offsets().collect();
    assert_eq!(offsets.len(), 8);
    assert!(!offsets.contains(&pos!(0, 0)));
    assert!(offsets.contains(&pos!(-1, -1)));
    assert!(offsets.contains(&pos!(1, 1)));
}

#[test]
fn test_pos_arithmetic() {
    assert_eq!(pos!(2, 3) + pos!(-1, 1), pos!(1, 4));
    assert_eq!(pos!(0, 0) + pos!(-1, -1), pos!(-1, -1));
}
