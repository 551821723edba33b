use crate::{pos, Cell, GridError, Pos};

/// An immutable snapshot of the grid at one simulation tick.
///
/// Cells are stored row-major. There is no mutating method: the next tick is
/// always a fresh value built by the [`Evolver`](crate::Evolver).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Generation {
    /// Builds a grid of the given dimensions, asking `initializer(row, col)`
    /// for the value of each cell in row-major order.
    pub fn create<C, F>(height: usize, width: usize, mut initializer: F) -> Result<Self, GridError>
    where
        C: Into<Cell>,
        F: FnMut(usize, usize) -> C,
    {
        check_dimensions(height, width)?;
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| initializer(row, col).into())
            .collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Builds a grid from row-major cells, checking they fill the dimensions.
    pub fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_dimensions(height, width)?;
        let expected = height * width;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self::from_buffer(height, width, cells))
    }

    /// `cells` must already hold `height * width` values.
    pub(crate) fn from_buffer(height: usize, width: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self {
            height,
            width,
            cells,
        }
    }

    /// Returns the cell at `pos`, or [`Cell::Dead`] when `pos` lies outside the grid.
    pub fn get(&self, pos: Pos) -> Cell {
        self.index(pos)
            .map(|index| self.cells[index])
            .unwrap_or_default()
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.index(pos).is_some()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Positions of every alive cell, row-major.
    pub fn actives(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_active())
            .map(|(index, _)| pos!((index / self.width) as i32, (index % self.width) as i32))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }

    fn index(&self, Pos { row, col }: Pos) -> Option<usize> {
        let row = usize::try_from(row).ok().filter(|row| *row < self.height)?;
        let col = usize::try_from(col).ok().filter(|col| *col < self.width)?;
        Some(row * self.width + col)
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<(), GridError> {
    if height == 0 || width == 0 {
        return Err(GridError::InvalidDimension { height, width });
    }
    Ok(())
}
