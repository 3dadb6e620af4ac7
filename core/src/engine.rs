use alloc::collections::VecDeque;
use chrono::{DateTime, Utc};

use crate::*;

/// Where a move comes from. Live moves carry the time they were made and are appended to the replay log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOrigin {
    Live(DateTime<Utc>),
    Replay,
}

impl MoveOrigin {
    fn now(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Live(now) => Some(now),
            Self::Replay => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Refused outright and not recorded: the game is over or the target is flagged.
    Ignored,
    /// Accepted and recorded, but nothing on the board changed.
    NoChange,
    Changed,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Ignored => false,
            NoChange => false,
            Changed => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn is_recorded(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Won,
    Lost,
}

/// Owns the grid, the session counters and both logs, and applies moves to them.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    session: GameSession,
    mines: MinePlacementRecord,
    moves: ReplayLog,
    seed: u64,
}

impl Game {
    /// Builds an empty board. Mines are placed lazily on the first uncover using `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            grid: Grid::new(config.size)?,
            session: GameSession::new(config.mines),
            mines: MinePlacementRecord::default(),
            moves: ReplayLog::default(),
            seed,
        })
    }

    /// Rebuilds a game from its recorded mines and moves. The moves go through the normal move path as replays.
    ///
    /// Anything that does not fit `config` is reported as [`GameError::CorruptSaveData`].
    pub fn restore(
        config: GameConfig,
        seed: u64,
        mines: &MinePlacementRecord,
        moves: &ReplayLog,
    ) -> Result<Self> {
        let mut game = Self::new(config, seed)?;

        if mines.is_empty() {
            // flags before the first uncover are harmless, an uncover would need the lost layout
            if moves.iter().any(|mv| mv.kind == MoveKind::Uncover) {
                return Err(GameError::CorruptSaveData);
            }
        } else {
            if mines.len() != usize::from(config.mines) {
                return Err(GameError::CorruptSaveData);
            }
            for &coords in mines.iter() {
                game.grid
                    .validate_coords(coords)
                    .map_err(|_| GameError::CorruptSaveData)?;
                if !game.grid.place_mine(coords) {
                    return Err(GameError::CorruptSaveData);
                }
            }
            game.mines = mines.clone();
            game.session.mines_placed = true;
        }

        for &mv in moves.iter() {
            game.apply_move(mv, MoveOrigin::Replay)
                .map_err(|_| GameError::CorruptSaveData)?;
        }
        game.moves = moves.clone();

        log::debug!(
            "Restored game: {} mines, {} moves, state {:?}",
            game.mines.len(),
            game.moves.len(),
            game.state()
        );
        Ok(game)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn mines(&self) -> &MinePlacementRecord {
        &self.mines
    }

    pub fn moves(&self) -> &ReplayLog {
        &self.moves
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn cell_at(&self, coords: Coord2) -> CellState {
        self.grid[coords].state()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.session.clock.elapsed_ms()
    }

    /// Mines not yet accounted for by a flag, 0 once the game is won.
    pub fn mines_left(&self) -> CellCount {
        if self.state() == GameState::Won {
            0
        } else {
            self.session.total_mines - self.session.total_flagged
        }
    }

    pub fn uncover(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<MoveOutcome> {
        self.apply_move(Move::uncover(coords), MoveOrigin::Live(now))
    }

    pub fn toggle_flag(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<MoveOutcome> {
        self.apply_move(Move::flag(coords), MoveOrigin::Live(now))
    }

    /// Applies one move, evaluates the result and records live moves in the replay log.
    pub fn apply_move(&mut self, mv: Move, origin: MoveOrigin) -> Result<MoveOutcome> {
        let coords = self.grid.validate_coords(mv.coords)?;

        let outcome = match mv.kind {
            MoveKind::Uncover => self.uncover_cell(coords, origin)?,
            MoveKind::Flag => self.toggle_flag_cell(coords),
        };

        if !outcome.is_recorded() {
            return Ok(outcome);
        }

        log::debug!("Applied {:?} ({:?}): {:?}", mv, origin, outcome);

        let outcome = match self.evaluate(origin.now()) {
            Some(GameEnd::Won) => MoveOutcome::Won,
            Some(GameEnd::Lost) => MoveOutcome::Lost,
            None => outcome,
        };

        if let MoveOrigin::Live(_) = origin {
            self.moves.push(mv);
        }

        Ok(outcome)
    }

    /// Ends the game if it has just been lost or won. Returns `None` when nothing changed, including every call after
    /// the game has already ended.
    pub fn evaluate(&mut self, now: Option<DateTime<Utc>>) -> Option<GameEnd> {
        if !self.session.running {
            return None;
        }

        let end = if self.session.lost {
            self.grid.expose_mines();
            GameEnd::Lost
        } else if self.session.uncovered_count == self.config.safe_cell_count() {
            GameEnd::Won
        } else {
            return None;
        };

        self.session.running = false;
        if let Some(now) = now {
            self.session.clock.freeze(now);
        }
        log::debug!("Game ended: {:?} after {} ms", end, self.elapsed_ms());
        Some(end)
    }

    /// Advances the timer. Does nothing once the game is over or before it has started.
    pub fn tick(&mut self, now: DateTime<Utc>) -> u64 {
        if self.session.running {
            self.session.clock.tick(now)
        } else {
            self.session.clock.elapsed_ms()
        }
    }

    /// Restores the timer after a replay. Returns whether the game had ended without a persisted end time and
    /// the clock was frozen just now.
    pub fn restore_clock(
        &mut self,
        started_at: Option<DateTime<Utc>>,
        ended_ms: Option<u64>,
        now: DateTime<Utc>,
    ) -> bool {
        let clock = &mut self.session.clock;
        if let Some(started_at) = started_at {
            clock.resume(started_at);
        }
        match ended_ms {
            Some(elapsed_ms) => {
                clock.freeze_at(elapsed_ms);
                false
            }
            None if !self.session.running => clock.freeze(now),
            None => {
                clock.tick(now);
                false
            }
        }
    }

    fn uncover_cell(&mut self, coords: Coord2, origin: MoveOrigin) -> Result<MoveOutcome> {
        if !self.session.running || self.grid[coords].is_flagged() {
            return Ok(MoveOutcome::Ignored);
        }

        if !self.session.mines_placed {
            self.place_mines(coords)?;
            if let Some(now) = origin.now() {
                self.session.clock.start(now);
            }
        }

        let cell = self.grid[coords];
        let changed = if !cell.is_uncovered() {
            self.reveal_from([coords])
        } else if cell.is_satisfied() {
            // chord: trust the flags and open everything else around this cell
            let targets = self.grid.neighbors(coords, false, false);
            self.reveal_from(targets)
        } else {
            false
        };

        Ok(if changed {
            MoveOutcome::Changed
        } else {
            MoveOutcome::NoChange
        })
    }

    /// Uncovers each start cell, flood filling through zero-count cells with a work list. A mine among the
    /// start cells detonates without ending the pass, so a bad chord still opens its safe neighbours.
    fn reveal_from(&mut self, starts: impl IntoIterator<Item = Coord2>) -> bool {
        let mut to_visit: VecDeque<Coord2> = starts.into_iter().collect();
        let mut changed = false;

        while let Some(visit_coords) = to_visit.pop_front() {
            if !self.grid.uncover(visit_coords) {
                // already uncovered through another path, or flagged
                continue;
            }
            changed = true;

            let cell = self.grid[visit_coords];
            if cell.is_mine() {
                log::debug!("Mine hit at {:?}", visit_coords);
                self.session.detonate(visit_coords);
                continue;
            }

            self.session.uncovered_count += 1;
            log::trace!(
                "Uncovered {:?}, adjacent mines: {}",
                visit_coords,
                cell.adjacent_mines()
            );

            if cell.adjacent_mines() == 0 {
                to_visit.extend(self.grid.neighbors(visit_coords, false, false));
            }
        }

        changed
    }

    fn toggle_flag_cell(&mut self, coords: Coord2) -> MoveOutcome {
        use MoveOutcome::*;

        if !self.session.running {
            return Ignored;
        }
        if self.session.uncovered_count == 0 || self.grid[coords].is_uncovered() {
            return NoChange;
        }

        if self.grid[coords].is_flagged() {
            self.grid.set_flag(coords, false);
            self.session.total_flagged -= 1;
            Changed
        } else if self.session.total_flagged < self.session.total_mines {
            self.grid.set_flag(coords, true);
            self.session.total_flagged += 1;
            Changed
        } else {
            NoChange
        }
    }

    fn place_mines(&mut self, start: Coord2) -> Result<()> {
        let record = BubbleGenerator::new(self.seed, start).generate(self.config)?;
        for &coords in record.iter() {
            self.grid.place_mine(coords);
        }
        self.mines = record;
        self.session.mines_placed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(ms).unwrap()
    }

    /// Game with a fixed layout, as if the first uncover had already placed the mines.
    fn layout(size: Coord2, mines: &[Coord2]) -> Game {
        let config = GameConfig::new(size, mines.len() as CellCount).unwrap();
        let record = mines.iter().copied().collect();
        Game::restore(config, 0, &record, &ReplayLog::default()).unwrap()
    }

    fn snapshot(game: &Game) -> Vec<CellState> {
        game.grid().positions().map(|pos| game.cell_at(pos)).collect()
    }

    #[test]
    fn flood_fill_opens_zero_region_and_its_border() {
        // mine column on the right, everything left of it is a single zero region
        let mut game = layout((4, 5), &[(0, 4), (1, 4), (2, 4), (3, 4), (3, 3)]);

        assert_eq!(game.uncover((0, 0), at(0)).unwrap(), MoveOutcome::Won);

        assert_eq!(game.cell_at((0, 0)), CellState::Uncovered(0));
        assert_eq!(game.cell_at((1, 1)), CellState::Uncovered(0));
        assert_eq!(game.cell_at((0, 3)), CellState::Uncovered(2));
        assert_eq!(game.cell_at((1, 3)), CellState::Uncovered(3));
        assert_eq!(game.cell_at((2, 3)), CellState::Uncovered(4));
        assert_eq!(game.cell_at((3, 2)), CellState::Uncovered(1));
        for &mine in &[(0, 4), (1, 4), (2, 4), (3, 4), (3, 3)] {
            assert_eq!(game.cell_at(mine), CellState::Covered);
        }
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn flood_fill_stops_at_numbered_cells() {
        let mut game = layout((3, 5), &[(0, 2), (2, 2)]);

        game.uncover((1, 0), at(0)).unwrap();

        assert_eq!(game.cell_at((0, 0)), CellState::Uncovered(0));
        assert_eq!(game.cell_at((1, 1)), CellState::Uncovered(2));
        assert_eq!(game.cell_at((1, 2)), CellState::Covered);
        assert_eq!(game.cell_at((1, 4)), CellState::Covered);
        assert_eq!(game.session().uncovered_count(), 6);
    }

    #[test]
    fn hitting_a_mine_loses_and_exposes_the_others() {
        let mut game = layout((3, 3), &[(0, 0), (2, 2)]);
        game.uncover((1, 1), at(0)).unwrap();

        assert_eq!(game.uncover((0, 0), at(10)).unwrap(), MoveOutcome::Lost);

        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.session().detonator(), Some((0, 0)));
        assert_eq!(game.cell_at((0, 0)), CellState::Detonated);
        assert_eq!(game.cell_at((2, 2)), CellState::Mine);
        assert_eq!(game.session().uncovered_count(), 1);
    }

    #[test]
    fn no_moves_are_accepted_after_a_loss() {
        let mut game = layout((3, 3), &[(0, 0), (2, 2)]);
        game.uncover((1, 1), at(0)).unwrap();
        game.uncover((0, 0), at(10)).unwrap();
        let before = snapshot(&game);
        let recorded = game.moves().len();

        assert_eq!(game.uncover((0, 1), at(20)).unwrap(), MoveOutcome::Ignored);
        assert_eq!(game.toggle_flag((0, 2), at(30)).unwrap(), MoveOutcome::Ignored);

        assert_eq!(snapshot(&game), before);
        assert_eq!(game.moves().len(), recorded);
    }

    #[test]
    fn uncovering_a_flagged_cell_is_ignored() {
        let mut game = layout((3, 3), &[(0, 0), (2, 2)]);
        game.uncover((1, 1), at(0)).unwrap();
        game.toggle_flag((0, 1), at(1)).unwrap();
        let before = snapshot(&game);

        assert_eq!(game.uncover((0, 1), at(2)).unwrap(), MoveOutcome::Ignored);

        assert_eq!(snapshot(&game), before);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn flags_are_refused_before_the_first_reveal() {
        let config = GameConfig::new((5, 5), 3).unwrap();
        let mut game = Game::new(config, 1).unwrap();

        assert_eq!(game.toggle_flag((0, 0), at(0)).unwrap(), MoveOutcome::NoChange);
        assert_eq!(game.cell_at((0, 0)), CellState::Covered);
        assert_eq!(game.session().total_flagged(), 0);
    }

    #[test]
    fn flag_supply_is_capped_at_mine_count() {
        let mut game = layout((3, 4), &[(0, 3), (2, 3)]);
        game.uncover((1, 0), at(0)).unwrap();

        assert_eq!(game.toggle_flag((0, 3), at(1)).unwrap(), MoveOutcome::Changed);
        assert_eq!(game.toggle_flag((1, 3), at(2)).unwrap(), MoveOutcome::Changed);
        assert_eq!(game.toggle_flag((2, 3), at(3)).unwrap(), MoveOutcome::NoChange);

        assert_eq!(game.session().total_flagged(), 2);
        assert_eq!(game.cell_at((2, 3)), CellState::Covered);
        assert_eq!(game.mines_left(), 0);
    }

    #[test]
    fn double_toggle_restores_adjacent_flag_counts() {
        let mut game = layout((3, 4), &[(0, 3), (2, 3)]);
        game.uncover((1, 0), at(0)).unwrap();
        let counts = |game: &Game| -> Vec<u8> {
            game.grid()
                .positions()
                .map(|pos| game.grid()[pos].adjacent_flags())
                .collect()
        };
        let before = counts(&game);

        game.toggle_flag((1, 3), at(1)).unwrap();
        assert_eq!(game.grid()[(0, 2)].adjacent_flags(), 1);
        game.toggle_flag((1, 3), at(2)).unwrap();

        assert_eq!(counts(&game), before);
        assert_eq!(game.session().total_flagged(), 0);
    }

    #[test]
    fn chord_opens_remaining_neighbours_when_flags_match() {
        let mut game = layout((3, 3), &[(0, 1), (2, 1)]);
        game.uncover((1, 1), at(0)).unwrap();
        game.toggle_flag((0, 1), at(1)).unwrap();
        game.toggle_flag((2, 1), at(2)).unwrap();

        let outcome = game.uncover((1, 1), at(3)).unwrap();

        assert_eq!(outcome, MoveOutcome::Won);
        assert_eq!(game.cell_at((1, 0)), CellState::Uncovered(2));
        assert_eq!(game.cell_at((1, 2)), CellState::Uncovered(2));
        assert_eq!(game.cell_at((0, 1)), CellState::Flagged);
    }

    #[test]
    fn chord_with_a_wrong_flag_detonates() {
        let mut game = layout((3, 3), &[(0, 1), (2, 1)]);
        game.uncover((1, 1), at(0)).unwrap();
        game.toggle_flag((0, 1), at(1)).unwrap();
        game.toggle_flag((1, 0), at(2)).unwrap();

        let outcome = game.uncover((1, 1), at(3)).unwrap();

        assert_eq!(outcome, MoveOutcome::Lost);
        assert_eq!(game.cell_at((2, 1)), CellState::Detonated);
        assert_eq!(game.session().detonator(), Some((2, 1)));
    }

    #[test]
    fn bad_chord_opens_every_target_and_keeps_the_first_detonator() {
        let mut game = layout((3, 3), &[(0, 1), (2, 1)]);
        game.uncover((1, 1), at(0)).unwrap();
        game.toggle_flag((1, 0), at(1)).unwrap();
        game.toggle_flag((1, 2), at(2)).unwrap();

        assert_eq!(game.uncover((1, 1), at(3)).unwrap(), MoveOutcome::Lost);

        assert_eq!(game.cell_at((0, 1)), CellState::Detonated);
        assert_eq!(game.cell_at((2, 1)), CellState::Detonated);
        assert_eq!(game.cell_at((0, 0)), CellState::Uncovered(1));
        assert_eq!(game.cell_at((2, 2)), CellState::Uncovered(1));
        assert_eq!(game.session().detonator(), Some((0, 1)));
    }

    #[test]
    fn unsatisfied_uncovered_cell_is_a_recorded_no_op() {
        let mut game = layout((3, 3), &[(0, 1), (2, 1)]);
        game.uncover((1, 1), at(0)).unwrap();

        assert_eq!(game.uncover((1, 1), at(1)).unwrap(), MoveOutcome::NoChange);
        assert_eq!(game.moves().len(), 2);
    }

    #[test]
    fn win_fires_once() {
        let mut game = layout((1, 2), &[(0, 0)]);

        assert_eq!(game.uncover((0, 1), at(0)).unwrap(), MoveOutcome::Won);
        assert_eq!(game.evaluate(Some(at(5))), None);
        assert_eq!(game.uncover((0, 0), at(6)).unwrap(), MoveOutcome::Ignored);
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.mines_left(), 0);
    }

    #[test]
    fn first_uncover_places_mines_and_starts_the_clock() {
        let config = GameConfig::new((9, 9), 10).unwrap();
        let mut game = Game::new(config, 42).unwrap();
        assert_eq!(game.state(), GameState::Ready);

        game.uncover((4, 4), at(1_000)).unwrap();

        assert!(game.session().mines_placed());
        assert_eq!(game.mines().len(), 10);
        assert_eq!(game.cell_at((4, 4)), CellState::Uncovered(0));
        assert_eq!(game.session().clock().started_at(), Some(at(1_000)));
        assert_eq!(game.tick(at(2_500)), 1_500);
        for pos in game.grid().positions() {
            let expected = game
                .grid()
                .neighbors(pos, true, true)
                .into_iter()
                .filter(|&n| game.grid()[n].is_mine())
                .count() as u8;
            assert_eq!(game.grid()[pos].adjacent_mines(), expected);
        }
    }

    #[test]
    fn timer_freezes_when_the_game_ends() {
        let mut game = layout((1, 3), &[(0, 0)]);
        game.session.clock.start(at(0));

        game.uncover((0, 2), at(4_200)).unwrap();

        assert!(game.is_finished());
        assert_eq!(game.elapsed_ms(), 4_200);
        assert_eq!(game.tick(at(60_000)), 4_200);
    }

    #[test]
    fn replaying_recorded_moves_reproduces_the_board() {
        let config = GameConfig::new((8, 8), 10).unwrap();
        let mut live = Game::new(config, 1234).unwrap();
        live.uncover((3, 3), at(0)).unwrap();

        // flag every mine next to an uncovered cell, then chord and click around
        let mut t = 1;
        let positions: Vec<_> = live.grid().positions().collect();
        for &pos in &positions {
            if live.grid()[pos].is_mine()
                && live
                    .grid()
                    .neighbors(pos, true, true)
                    .iter()
                    .any(|&n| live.grid()[n].is_uncovered())
            {
                live.toggle_flag(pos, at(t)).unwrap();
                t += 1;
            }
        }
        for &pos in &positions {
            live.uncover(pos, at(t)).unwrap();
            t += 1;
        }

        let replayed = Game::restore(config, 0, live.mines(), live.moves()).unwrap();

        assert_eq!(snapshot(&replayed), snapshot(&live));
        assert_eq!(replayed.state(), live.state());
        assert_eq!(replayed.session().uncovered_count(), live.session().uncovered_count());
        assert_eq!(replayed.session().total_flagged(), live.session().total_flagged());
        assert_eq!(replayed.session().detonator(), live.session().detonator());
        assert_eq!(replayed.moves(), live.moves());
    }

    #[test]
    fn restore_rejects_out_of_range_mines() {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let mines = [(3, 0)].into_iter().collect();

        let result = Game::restore(config, 0, &mines, &ReplayLog::default());

        assert_eq!(result.unwrap_err(), GameError::CorruptSaveData);
    }

    #[test]
    fn restore_rejects_mismatched_mine_count_and_duplicates() {
        let config = GameConfig::new((3, 3), 2).unwrap();
        let short = [(0, 0)].into_iter().collect();
        let duplicated = [(0, 0), (0, 0)].into_iter().collect();

        assert_eq!(
            Game::restore(config, 0, &short, &ReplayLog::default()).unwrap_err(),
            GameError::CorruptSaveData
        );
        assert_eq!(
            Game::restore(config, 0, &duplicated, &ReplayLog::default()).unwrap_err(),
            GameError::CorruptSaveData
        );
    }

    #[test]
    fn restore_rejects_out_of_range_moves() {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let mines = [(0, 0)].into_iter().collect();
        let moves = [Move::uncover((2, 2)), Move::flag((9, 9))].into_iter().collect();

        let result = Game::restore(config, 0, &mines, &moves);

        assert_eq!(result.unwrap_err(), GameError::CorruptSaveData);
    }

    #[test]
    fn restore_rejects_uncover_without_mines() {
        let config = GameConfig::new((3, 3), 1).unwrap();
        let moves = [Move::uncover((1, 1))].into_iter().collect();

        let result = Game::restore(config, 0, &MinePlacementRecord::default(), &moves);

        assert_eq!(result.unwrap_err(), GameError::CorruptSaveData);
    }

    #[test]
    fn restore_clock_freezes_at_persisted_end() {
        let mut game = layout((1, 2), &[(0, 0)]);
        game.apply_move(Move::uncover((0, 1)), MoveOrigin::Replay).unwrap();

        let newly_frozen = game.restore_clock(Some(at(1_000)), Some(7_300), at(99_000));

        assert!(!newly_frozen);
        assert_eq!(game.elapsed_ms(), 7_300);
        assert_eq!(game.tick(at(120_000)), 7_300);
    }

    #[test]
    fn restore_clock_freezes_finished_game_without_persisted_end() {
        let mut game = layout((1, 2), &[(0, 0)]);
        game.apply_move(Move::uncover((0, 1)), MoveOrigin::Replay).unwrap();

        assert!(game.restore_clock(Some(at(1_000)), None, at(3_000)));
        assert_eq!(game.elapsed_ms(), 2_000);
    }

    #[test]
    fn restore_clock_keeps_running_game_ticking() {
        let mut game = layout((3, 3), &[(0, 0), (0, 2)]);
        game.apply_move(Move::uncover((2, 2)), MoveOrigin::Replay).unwrap();
        assert_eq!(game.state(), GameState::Active);

        assert!(!game.restore_clock(Some(at(1_000)), None, at(4_000)));
        assert_eq!(game.tick(at(5_000)), 4_000);
    }

    #[test]
    fn replayed_moves_are_not_recorded() {
        let mut game = layout((3, 3), &[(0, 0)]);

        game.apply_move(Move::uncover((2, 2)), MoveOrigin::Replay).unwrap();

        assert!(game.moves().is_empty());
        assert!(game.session().clock().started_at().is_none());
    }

    #[test]
    fn out_of_range_move_is_an_error() {
        let mut game = layout((3, 3), &[(0, 0)]);
        assert_eq!(game.uncover((3, 1), at(0)), Err(GameError::InvalidCoords));
    }
}
