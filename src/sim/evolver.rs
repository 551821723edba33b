use crate::{pos, utils::neighbor_offsets, Cell, Generation, Pos};

/// How neighbor coordinates outside the grid are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    /// Outside coordinates do not exist and count as dead.
    #[default]
    Clamped,
    /// Outside coordinates wrap around to the opposite edge.
    Toroidal,
}

impl Boundary {
    fn resolve(self, pos: Pos, height: usize, width: usize) -> Pos {
        match self {
            Boundary::Clamped => pos,
            Boundary::Toroidal => pos!(
                pos.row.rem_euclid(height as i32),
                pos.col.rem_euclid(width as i32)
            ),
        }
    }
}

/// B3/S23: the next value of `cell` given its count of alive neighbors.
pub fn rule(cell: Cell, neighbors: usize) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive, // survives
        (Cell::Alive, _) => Cell::Dead,      // solitude or overpopulation
        (Cell::Dead, 3) => Cell::Alive,      // birth
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Computes successive generations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evolver {
    boundary: Boundary,
}

impl Evolver {
    pub fn new(boundary: Boundary) -> Self {
        Self { boundary }
    }

    pub fn neighbor_count(&self, generation: &Generation, pos: Pos) -> usize {
        let (height, width) = generation.dimensions();
        neighbor_offsets()
            .map(|offset| self.boundary.resolve(pos + offset, height, width))
            // a neighbor that wraps back onto the cell itself is not a neighbor
            .filter(|neighbor| *neighbor != pos)
            .filter(|neighbor| generation.get(*neighbor).is_active())
            .count()
    }

    /// Builds the next generation. Reads only from `current` and writes only
    /// into the new buffer, one output row at a time.
    pub fn step(&self, current: &Generation) -> Generation {
        let (height, width) = current.dimensions();
        let mut next = vec![Cell::Dead; height * width];

        let rows = next.chunks_exact_mut(width).zip(current.rows());
        for (row, (output, input)) in rows.enumerate() {
            for (col, (cell, &value)) in output.iter_mut().zip(input).enumerate() {
                let pos = pos!(row as i32, col as i32);
                *cell = rule(value, self.neighbor_count(current, pos));
            }
        }

        Generation::from_buffer(height, width, next)
    }
}

/// Steps `current` with a clamped boundary.
pub fn step(current: &Generation) -> Generation {
    Evolver::default().step(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_actives(height: usize, width: usize, actives: &[(i32, i32)]) -> Generation {
        Generation::create(height, width, |row, col| {
            actives.contains(&(row as i32, col as i32))
        })
        .unwrap()
    }

    fn actives(generation: &Generation) -> Vec<(i32, i32)> {
        let mut result: Vec<_> = generation
            .actives()
            .into_iter()
            .map(|p| (p.row, p.col))
            .collect();
        result.sort();
        result
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            let survives = rule(Cell::Alive, n);
            let born = rule(Cell::Dead, n);
            assert_eq!(survives.is_active(), n == 2 || n == 3, "alive with {n}");
            assert_eq!(born.is_active(), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn test_step_keeps_dimensions() {
        let generation = Generation::create(4, 9, |row, col| (row * col) % 3 == 1).unwrap();
        assert_eq!(step(&generation).dimensions(), (4, 9));
        let single = Generation::create(1, 1, |_, _| true).unwrap();
        assert_eq!(step(&single).dimensions(), (1, 1));
    }

    #[test]
    fn test_empty_stays_empty() {
        let generation = Generation::create(6, 6, |_, _| false).unwrap();
        assert_eq!(step(&generation), generation);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let generation = from_actives(5, 5, &[(2, 2)]);
        assert_eq!(step(&generation).population(), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let generation = from_actives(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(step(&generation), generation);
        // still stable when pressed into the corner
        let corner = from_actives(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&corner), corner);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = from_actives(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = step(&horizontal);
        assert_eq!(actives(&vertical), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(step(&vertical), horizontal);
    }

    #[test]
    fn test_input_is_untouched() {
        let generation = from_actives(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let copy = generation.clone();
        let _ = step(&generation);
        assert_eq!(generation, copy);
    }

    #[test]
    fn test_update_is_simultaneous() {
        // updating in place would let later cells count (0, 1) as already born
        let generation = from_actives(3, 3, &[(1, 0), (1, 1), (1, 2)]);
        assert_eq!(actives(&step(&generation)), vec![(0, 1), (1, 1), (2, 1)]);
    }

    const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

    #[test]
    fn test_glider_phases() {
        let origin = (2, 2);
        let shifted = |cells: &[(i32, i32)]| -> Vec<(i32, i32)> {
            cells
                .iter()
                .map(|&(r, c)| (r + origin.0, c + origin.1))
                .collect()
        };
        let expected: [Vec<(i32, i32)>; 4] = [
            vec![(1, 0), (1, 2), (2, 1), (2, 2), (3, 1)],
            vec![(1, 2), (2, 0), (2, 2), (3, 1), (3, 2)],
            vec![(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)],
            vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)],
        ];

        let mut generation = from_actives(12, 12, &shifted(&GLIDER));
        for phase in expected {
            generation = step(&generation);
            let mut phase = shifted(&phase);
            phase.sort();
            assert_eq!(actives(&generation), phase);
        }

        // after four generations the glider is the same shape moved by (1, 1)
        let moved: Vec<_> = GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        let mut moved = shifted(&moved);
        moved.sort();
        assert_eq!(actives(&generation), moved);
    }

    #[test]
    fn test_glider_settles_into_corner_block() {
        // on a bounded 5x5 grid the glider reaches the far corner and, lacking the
        // cells beyond the edge, collapses into a block
        let mut generation = from_actives(5, 5, &GLIDER);
        for _ in 0..8 {
            generation = step(&generation);
        }
        assert_eq!(actives(&generation), vec![(2, 3), (3, 4), (4, 2), (4, 3), (4, 4)]);
        for _ in 0..3 {
            generation = step(&generation);
        }
        assert_eq!(actives(&generation), vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
        assert_eq!(step(&generation), generation);
    }

    #[test]
    fn test_corner_does_not_wrap() {
        // the three cells would all be neighbors of (0,0) on a torus
        let generation = from_actives(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        let clamped = Evolver::new(Boundary::Clamped);
        assert_eq!(clamped.neighbor_count(&generation, pos!(0, 0)), 0);
        assert_eq!(clamped.step(&generation).get(pos!(0, 0)), Cell::Dead);

        let toroidal = Evolver::new(Boundary::Toroidal);
        assert_eq!(toroidal.neighbor_count(&generation, pos!(0, 0)), 3);
        assert_eq!(toroidal.step(&generation).get(pos!(0, 0)), Cell::Alive);
    }

    #[test]
    fn test_corner_neighbor_count() {
        let generation = Generation::create(3, 3, |_, _| true).unwrap();
        let evolver = Evolver::default();
        assert_eq!(evolver.neighbor_count(&generation, pos!(0, 0)), 3);
        assert_eq!(evolver.neighbor_count(&generation, pos!(0, 1)), 5);
        assert_eq!(evolver.neighbor_count(&generation, pos!(1, 1)), 8);
    }

    #[test]
    fn test_toroidal_narrow_grid_counts_every_offset() {
        let toroidal = Evolver::new(Boundary::Toroidal);

        // on a 2x2 torus all four diagonal offsets of (1, 1) land on (0, 0)
        let square = from_actives(2, 2, &[(0, 0)]);
        assert_eq!(toroidal.neighbor_count(&square, pos!(1, 1)), 4);
        // from (0, 1) only the two horizontal offsets reach it
        assert_eq!(toroidal.neighbor_count(&square, pos!(0, 1)), 2);
        assert_eq!(toroidal.neighbor_count(&square, pos!(0, 0)), 0);

        // on a single row the three offsets of a column collapse onto one cell
        let row = from_actives(1, 3, &[(0, 0)]);
        assert_eq!(toroidal.neighbor_count(&row, pos!(0, 1)), 3);
        assert_eq!(toroidal.neighbor_count(&row, pos!(0, 2)), 3);
        // offsets wrapping onto the cell itself are skipped
        assert_eq!(toroidal.neighbor_count(&row, pos!(0, 0)), 0);

        // the same grids never wrap when clamped
        let clamped = Evolver::default();
        assert_eq!(clamped.neighbor_count(&square, pos!(1, 1)), 1);
        assert_eq!(clamped.neighbor_count(&row, pos!(0, 2)), 0);
    }

    #[test]
    fn test_toroidal_glider_wraps() {
        let evolver = Evolver::new(Boundary::Toroidal);
        let start = from_actives(6, 6, &GLIDER);
        let mut generation = start.clone();
        // 6 cells of travel on a 6x6 torus takes 24 generations
        for _ in 0..24 {
            generation = evolver.step(&generation);
        }
        assert_eq!(generation, start);
    }
}
