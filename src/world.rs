#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl From<bool> for Cell {
    fn from(active: bool) -> Self {
        if active {
            Self::Alive
        } else {
            Self::Dead
        }
    }
}

pub use generation::Generation;
mod generation;
