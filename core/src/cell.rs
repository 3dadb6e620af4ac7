use serde::{Deserialize, Serialize};

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Covered,
    Flagged,
    Uncovered(u8),
    /// The mine that ended the game.
    Detonated,
    /// A mine shown after a loss without being uncovered.
    Mine,
}

impl CellState {
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Covered | Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Covered
    }
}

/// Per-position data. Mutation goes through [`crate::Grid`] so neighbour counters stay in sync.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    mine: bool,
    uncovered: bool,
    flagged: bool,
    exposed: bool,
    adjacent_mines: u8,
    adjacent_flags: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_uncovered(&self) -> bool {
        self.uncovered
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Shown as a mine after a loss, without counting as uncovered.
    pub const fn is_exposed(&self) -> bool {
        self.exposed
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn adjacent_flags(&self) -> u8 {
        self.adjacent_flags
    }

    /// Every mine around this cell is accounted for by a flag.
    pub const fn is_satisfied(&self) -> bool {
        self.adjacent_mines == self.adjacent_flags
    }

    pub const fn state(&self) -> CellState {
        match (self.mine, self.uncovered, self.flagged) {
            (true, true, _) => CellState::Detonated,
            (false, true, _) => CellState::Uncovered(self.adjacent_mines),
            (_, false, true) => CellState::Flagged,
            (true, false, false) if self.exposed => CellState::Mine,
            (_, false, false) => CellState::Covered,
        }
    }

    pub(crate) fn set_mine(&mut self) -> bool {
        !core::mem::replace(&mut self.mine, true)
    }

    pub(crate) fn uncover(&mut self) -> bool {
        if self.uncovered || self.flagged {
            return false;
        }
        self.uncovered = true;
        true
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) -> bool {
        if self.uncovered || self.flagged == flagged {
            return false;
        }
        self.flagged = flagged;
        true
    }

    pub(crate) fn expose(&mut self) {
        if self.mine && !self.uncovered {
            self.exposed = true;
        }
    }

    pub(crate) fn add_adjacent_mine(&mut self) {
        self.adjacent_mines += 1;
    }

    pub(crate) fn add_adjacent_flag(&mut self) {
        self.adjacent_flags += 1;
    }

    pub(crate) fn remove_adjacent_flag(&mut self) {
        self.adjacent_flags -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_covered_and_unflagged() {
        let cell = Cell::default();
        assert_eq!(cell.state(), CellState::Covered);
        assert!(cell.is_satisfied());
    }

    #[test]
    fn flagged_cell_refuses_uncover() {
        let mut cell = Cell::default();
        assert!(cell.set_flagged(true));
        assert!(!cell.uncover());
        assert_eq!(cell.state(), CellState::Flagged);
    }

    #[test]
    fn uncovered_cell_cannot_be_flagged() {
        let mut cell = Cell::default();
        cell.add_adjacent_mine();
        assert!(cell.uncover());
        assert!(!cell.set_flagged(true));
        assert_eq!(cell.state(), CellState::Uncovered(1));
    }

    #[test]
    fn uncovered_mine_is_the_detonator_and_exposed_mines_are_not() {
        let mut detonator = Cell::default();
        detonator.set_mine();
        detonator.uncover();
        detonator.expose();
        assert_eq!(detonator.state(), CellState::Detonated);
        assert!(!detonator.is_exposed());

        let mut other = Cell::default();
        other.set_mine();
        other.expose();
        assert_eq!(other.state(), CellState::Mine);
        assert!(!other.is_uncovered());
    }

    #[test]
    fn flagged_mine_stays_flagged_after_exposure() {
        let mut cell = Cell::default();
        cell.set_mine();
        cell.set_flagged(true);
        cell.expose();
        assert_eq!(cell.state(), CellState::Flagged);
    }

    #[test]
    fn set_mine_reports_first_placement_only() {
        let mut cell = Cell::default();
        assert!(cell.set_mine());
        assert!(!cell.set_mine());
    }
}
