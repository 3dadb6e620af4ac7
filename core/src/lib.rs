#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use best::*;
pub use cell::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use persist::*;
pub use replay::*;
pub use save::*;
pub use session::*;
pub use store::*;
pub use types::*;

mod best;
mod cell;
mod difficulty;
mod engine;
mod error;
mod generator;
mod grid;
mod persist;
mod replay;
mod save;
mod session;
mod store;
mod types;

/// Board dimensions and mine count for one game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(rows, cols)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Fails with [`GameError::InvalidDifficulty`] unless the board has at least one row, one column, one mine and
    /// one safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 || self.mines == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidDifficulty);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}
