use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid difficulty: board needs at least one row, one column and one safe cell")]
    InvalidDifficulty,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Saved game is corrupt and cannot be resumed")]
    CorruptSaveData,
    #[error("Unknown difficulty tier")]
    UnknownTier,
}

pub type Result<T> = core::result::Result<T, GameError>;
