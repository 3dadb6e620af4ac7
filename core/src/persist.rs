use chrono::{DateTime, Utc};

use crate::*;

/// What a live move did, including any best time it set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    pub new_best: bool,
}

/// A [`Game`] tied to a key-value store: every live move is saved as it happens, and opening the store again picks
/// up exactly where play stopped.
#[derive(Debug)]
pub struct PersistentGame<S: KeyValueStore> {
    store: S,
    /// Difficulty for the next new game.
    settings: DifficultySettings,
    /// Difficulty the current game was built with.
    game_settings: DifficultySettings,
    game: Game,
}

impl<S: KeyValueStore> PersistentGame<S> {
    /// Resumes the saved game if there is one. A save that cannot be replayed is discarded and a fresh game starts.
    pub fn open(store: S, seed: u64, now: DateTime<Utc>) -> Result<Self> {
        let settings: DifficultySettings = store.load_or_default();
        let (settings, config) = match settings.game_config() {
            Ok(config) => (settings, config),
            Err(err) => {
                log::warn!("Stored difficulty {:?} is unusable: {}", settings, err);
                let settings = DifficultySettings::default();
                (settings, settings.game_config()?)
            }
        };

        let mut this = Self {
            game: Game::new(config, seed)?,
            store,
            settings,
            game_settings: settings,
        };

        match SavedGame::load(&this.store) {
            Ok(None) => {}
            Ok(Some(saved)) => match Game::restore(config, seed, &saved.mines, &saved.clicks) {
                Ok(game) => {
                    this.game = game;
                    this.resume_clock(&saved, now);
                }
                Err(err) => this.discard_save(err),
            },
            Err(err) => this.discard_save(err),
        }

        Ok(this)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> DifficultySettings {
        self.settings
    }

    /// Best time for the current game's difficulty, `None` for custom difficulties or when nothing is recorded.
    pub fn best_time(&self) -> Option<u64> {
        let key = self.game_settings.best_time_key()?;
        BestTimes::get(&self.store, key)
    }

    /// Chooses the difficulty for the next new game. Rejected settings leave the current choice alone.
    pub fn set_difficulty(&mut self, settings: DifficultySettings) -> Result<()> {
        settings.game_config()?;
        self.settings = settings;
        Ok(())
    }

    /// Throws the current game and its save away and starts over with the chosen difficulty.
    pub fn new_game(&mut self, seed: u64) -> Result<()> {
        let config = self.settings.game_config()?;
        SavedGame::clear(&mut self.store);
        self.store.save(&self.settings);
        self.game = Game::new(config, seed)?;
        self.game_settings = self.settings;
        log::debug!("New game: {:?}", config);
        Ok(())
    }

    pub fn uncover(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<MoveReport> {
        let had_mines = self.game.session().mines_placed();
        let outcome = self.game.uncover(coords, now)?;
        if !had_mines && self.game.session().mines_placed() {
            SavedGame::store_mines(&mut self.store, self.game.mines());
            SavedGame::store_start(&mut self.store, now);
        }
        Ok(self.after_move(outcome))
    }

    pub fn toggle_flag(&mut self, coords: Coord2, now: DateTime<Utc>) -> Result<MoveReport> {
        let outcome = self.game.toggle_flag(coords, now)?;
        Ok(self.after_move(outcome))
    }

    /// Timer tick, a no-op once the game has ended.
    pub fn tick(&mut self, now: DateTime<Utc>) -> u64 {
        self.game.tick(now)
    }

    fn after_move(&mut self, outcome: MoveOutcome) -> MoveReport {
        if outcome.is_recorded() {
            SavedGame::store_clicks(&mut self.store, self.game.moves());
        }
        let new_best = outcome.is_final() && self.finish(outcome == MoveOutcome::Won);
        MoveReport { outcome, new_best }
    }

    /// Persists the final time once, and the best time on a first-time win.
    fn finish(&mut self, won: bool) -> bool {
        let elapsed_ms = self.game.elapsed_ms();
        if !SavedGame::store_end(&mut self.store, elapsed_ms) {
            return false;
        }
        match self.game_settings.best_time_key() {
            Some(key) if won => BestTimes::record(&mut self.store, key, elapsed_ms),
            _ => false,
        }
    }

    fn resume_clock(&mut self, saved: &SavedGame, now: DateTime<Utc>) {
        let newly_frozen = self
            .game
            .restore_clock(saved.started_at, saved.ended_ms, now);
        if newly_frozen {
            self.finish(self.game.state() == GameState::Won);
        }
    }

    fn discard_save(&mut self, err: GameError) {
        log::warn!("Discarding saved game: {}", err);
        SavedGame::clear(&mut self.store);
    }
}
