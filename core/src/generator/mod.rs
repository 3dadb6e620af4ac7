use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    /// Chooses mine positions for `config`, in placement order.
    fn generate(self, config: GameConfig) -> Result<MinePlacementRecord>;
}

/// Exclusion zone around the first uncovered cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SafetyBubble {
    /// Only the clicked cell is kept free.
    StartOnly,
    /// The clicked cell and its whole 3x3 block are kept free.
    Block,
}

impl SafetyBubble {
    pub const fn radius(self) -> Coord {
        match self {
            Self::StartOnly => 0,
            Self::Block => 1,
        }
    }

    /// Uses the full block whenever at least 9 cells stay free of mines.
    pub const fn for_config(config: GameConfig) -> Self {
        if config.safe_cell_count() >= 9 {
            Self::Block
        } else {
            Self::StartOnly
        }
    }
}
