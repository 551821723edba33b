//! Conway's game of life on a finite grid.
//!
//! A [`Generation`] is an immutable snapshot of the grid; an [`Evolver`]
//! reads one and builds the next, so no cell ever observes a neighbor's
//! next-generation value. Cells beyond the edge of the grid count as dead.
//!
//! ```
//! use lifegrid::{create_initial, pos, step, Cell};
//!
//! // a blinker
//! let generation =
//!     create_initial(5, 5, |row, col| row == 2 && (1..=3).contains(&col)).unwrap();
//! let next = step(&generation);
//! assert_eq!(next.get(pos!(1, 2)), Cell::Alive);
//! assert_eq!(next.get(pos!(2, 1)), Cell::Dead);
//! assert_eq!(step(&next), generation);
//! ```

pub use utils::Pos;
mod utils;

pub use error::{GridError, SetupError};
pub mod error;

pub use world::{Cell, Generation};
pub mod world;

pub use sim::{rule, step, Boundary, Evolver, Frame, Sim, SimHandle};
pub mod sim;

pub use config::{Config, Glyphs, Mode};
mod config;

pub mod seed;
pub mod setup;

pub use view::View;
pub mod view;

/// Builds the first generation; `initializer(row, col)` gives each cell's value.
pub fn create_initial<C, F>(
    height: usize,
    width: usize,
    initializer: F,
) -> Result<Generation, GridError>
where
    C: Into<Cell>,
    F: FnMut(usize, usize) -> C,
{
    Generation::create(height, width, initializer)
}
