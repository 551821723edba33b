use std::time::Duration;

use crate::{seed, Boundary, Generation, GridError};

/// Whether the initial generation comes from user values or the built-in map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Custom,
    #[default]
    Default,
}

/// The symbols drawn for each cell state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub live: String,
    pub dead: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            live: "#".to_string(),
            dead: ".".to_string(),
        }
    }
}

/// Everything needed to start a simulation. Built once, then passed by value.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub height: usize,
    pub width: usize,
    /// Probability in `[0, 1]` that a cell starts alive, custom mode only.
    pub density: f64,
    pub glyphs: Glyphs,
    pub tick_interval: Duration,
    pub boundary: Boundary,
    pub seed: Option<u64>,
}

impl Config {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

    pub fn custom(height: usize, width: usize, density: f64, glyphs: Glyphs) -> Self {
        Self {
            mode: Mode::Custom,
            height,
            width,
            density,
            glyphs,
            ..Self::default()
        }
    }

    pub fn initial_generation(&self) -> Result<Generation, GridError> {
        match self.mode {
            Mode::Custom => seed::random(self.height, self.width, self.density, self.seed),
            Mode::Default => Ok(seed::default_pattern()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let (height, width) = seed::default_pattern().dimensions();
        Self {
            mode: Mode::Default,
            height,
            width,
            density: 0.0,
            glyphs: Glyphs::default(),
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            boundary: Boundary::default(),
            seed: None,
        }
    }
}
