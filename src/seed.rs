//! Sources for the initial generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Cell, Generation, GridError};

/// Fills a grid where every cell is alive with probability `density`.
///
/// The same `seed` always produces the same grid; `None` seeds from entropy.
pub fn random(
    height: usize,
    width: usize,
    density: f64,
    seed: Option<u64>,
) -> Result<Generation, GridError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(GridError::InvalidDensity(density));
    }
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    Generation::create(height, width, |_, _| rng.gen_bool(density))
}

const DEFAULT_SIDE: usize = 25;

// top-left corners of the three r-pentominoes of the built-in map
const DEFAULT_ORIGINS: [(usize, usize); 3] = [(4, 4), (10, 10), (18, 13)];
const R_PENTOMINO: [(usize, usize); 5] = [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];

/// The built-in 25x25 map used when no custom values are given.
pub fn default_pattern() -> Generation {
    let alive = |row: usize, col: usize| {
        DEFAULT_ORIGINS.iter().any(|&(r0, c0)| {
            R_PENTOMINO
                .iter()
                .any(|&(dr, dc)| (r0 + dr, c0 + dc) == (row, col))
        })
    };
    Generation::from_buffer(
        DEFAULT_SIDE,
        DEFAULT_SIDE,
        (0..DEFAULT_SIDE * DEFAULT_SIDE)
            .map(|index| Cell::from(alive(index / DEFAULT_SIDE, index % DEFAULT_SIDE)))
            .collect(),
    )
}

/// Reads a plain-text pattern: `#` is an alive cell, any other character a
/// dead one, one line per row. Short lines are padded with dead cells.
pub fn parse_pattern(text: &str) -> Result<Generation, GridError> {
    let lines: Vec<&str> = text.lines().collect();
    let height = lines.len();
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let rows: Vec<Vec<Cell>> = lines
        .iter()
        .map(|line| line.chars().map(|c| Cell::from(c == '#')).collect())
        .collect();
    Generation::create(height, width, |row, col| {
        rows[row].get(col).copied().unwrap_or_default()
    })
}
