use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No mine placed yet, waiting for the first uncover.
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Wall-clock timer for one session, measured in milliseconds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Clock {
    started_at: Option<DateTime<Utc>>,
    elapsed_ms: u64,
    frozen: bool,
}

impl Clock {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_ticking(&self) -> bool {
        self.started_at.is_some() && !self.frozen
    }

    pub(crate) fn start(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() && !self.frozen {
            self.started_at = Some(now);
            self.elapsed_ms = 0;
        }
    }

    /// Recomputes the elapsed time, a no-op once frozen.
    pub(crate) fn tick(&mut self, now: DateTime<Utc>) -> u64 {
        if let (Some(started_at), false) = (self.started_at, self.frozen) {
            self.elapsed_ms = (now - started_at).num_milliseconds().max(0) as u64;
        }
        self.elapsed_ms
    }

    /// Stops the clock at `now`, returning whether it was still running.
    pub(crate) fn freeze(&mut self, now: DateTime<Utc>) -> bool {
        if self.frozen {
            return false;
        }
        self.tick(now);
        self.frozen = true;
        true
    }

    pub(crate) fn freeze_at(&mut self, elapsed_ms: u64) {
        self.elapsed_ms = elapsed_ms;
        self.frozen = true;
    }

    pub(crate) fn resume(&mut self, started_at: DateTime<Utc>) {
        self.started_at = Some(started_at);
        self.frozen = false;
    }
}

/// Counters and flags for the game in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) total_mines: CellCount,
    pub(crate) total_flagged: CellCount,
    pub(crate) uncovered_count: CellCount,
    pub(crate) lost: bool,
    pub(crate) running: bool,
    pub(crate) mines_placed: bool,
    pub(crate) detonator: Option<Coord2>,
    pub(crate) clock: Clock,
}

impl GameSession {
    pub fn new(total_mines: CellCount) -> Self {
        Self {
            total_mines,
            total_flagged: 0,
            uncovered_count: 0,
            lost: false,
            running: true,
            mines_placed: false,
            detonator: None,
            clock: Clock::default(),
        }
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn total_flagged(&self) -> CellCount {
        self.total_flagged
    }

    pub fn uncovered_count(&self) -> CellCount {
        self.uncovered_count
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    /// The mine whose uncovering lost the game.
    pub fn detonator(&self) -> Option<Coord2> {
        self.detonator
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn state(&self) -> GameState {
        match (self.running, self.lost, self.mines_placed) {
            (_, true, _) => GameState::Lost,
            (false, false, _) => GameState::Won,
            (true, false, false) => GameState::Ready,
            (true, false, true) => GameState::Active,
        }
    }

    pub(crate) fn detonate(&mut self, coords: Coord2) {
        self.lost = true;
        self.detonator.get_or_insert(coords);
    }
}
