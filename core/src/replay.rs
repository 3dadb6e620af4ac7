use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MoveKind {
    Uncover,
    Flag,
}

impl From<MoveKind> for u8 {
    fn from(kind: MoveKind) -> Self {
        match kind {
            MoveKind::Uncover => 0,
            MoveKind::Flag => 1,
        }
    }
}

impl TryFrom<u8> for MoveKind {
    type Error = GameError;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::Uncover),
            1 => Ok(Self::Flag),
            _ => Err(GameError::CorruptSaveData),
        }
    }
}

/// One recorded player action, stored as `[row, col, kind]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "(Coord, Coord, MoveKind)", from = "(Coord, Coord, MoveKind)")]
pub struct Move {
    pub coords: Coord2,
    pub kind: MoveKind,
}

impl Move {
    pub const fn uncover(coords: Coord2) -> Self {
        Self {
            coords,
            kind: MoveKind::Uncover,
        }
    }

    pub const fn flag(coords: Coord2) -> Self {
        Self {
            coords,
            kind: MoveKind::Flag,
        }
    }
}

impl From<Move> for (Coord, Coord, MoveKind) {
    fn from(mv: Move) -> Self {
        (mv.coords.0, mv.coords.1, mv.kind)
    }
}

impl From<(Coord, Coord, MoveKind)> for Move {
    fn from((row, col, kind): (Coord, Coord, MoveKind)) -> Self {
        Self {
            coords: (row, col),
            kind,
        }
    }
}

/// Append-only history of the moves applied during live play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplayLog(Vec<Move>);

impl ReplayLog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }
}

impl FromIterator<Move> for ReplayLog {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Mine positions in the order the generator placed them, stored as `[row, col]` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinePlacementRecord(Vec<Coord2>);

impl MinePlacementRecord {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coord2> {
        self.0.iter()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.0.contains(&coords)
    }

    pub(crate) fn push(&mut self, coords: Coord2) {
        self.0.push(coords);
    }
}

impl FromIterator<Coord2> for MinePlacementRecord {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
