use alloc::string::ToString;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::*;

pub const MINES_KEY: &str = "sweeper:mines";
pub const CLICKS_KEY: &str = "sweeper:clicks";
pub const START_KEY: &str = "sweeper:start";
pub const END_KEY: &str = "sweeper:end";

/// Everything needed to rebuild an in-progress or finished game after a reload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedGame {
    pub mines: MinePlacementRecord,
    pub clicks: ReplayLog,
    pub started_at: Option<DateTime<Utc>>,
    /// Frozen elapsed time, present once the game has ended.
    pub ended_ms: Option<u64>,
}

impl SavedGame {
    /// `Ok(None)` when no move has been saved yet.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Self>> {
        let Some(clicks) = store.get(CLICKS_KEY) else {
            return Ok(None);
        };

        let clicks: ReplayLog = parse_json(&clicks)?;
        let mines: MinePlacementRecord = match store.get(MINES_KEY) {
            Some(text) => parse_json(&text)?,
            None => MinePlacementRecord::default(),
        };
        let started_at = store
            .get(START_KEY)
            .map(|text| {
                text.parse::<i64>()
                    .ok()
                    .and_then(DateTime::<Utc>::from_timestamp_millis)
                    .ok_or(GameError::CorruptSaveData)
            })
            .transpose()?;
        let ended_ms = store
            .get(END_KEY)
            .map(|text| text.parse::<u64>().map_err(|_| GameError::CorruptSaveData))
            .transpose()?;

        Ok(Some(Self {
            mines,
            clicks,
            started_at,
            ended_ms,
        }))
    }

    pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) {
        for key in [MINES_KEY, CLICKS_KEY, START_KEY, END_KEY] {
            store.delete(key);
        }
    }

    pub fn store_mines<S: KeyValueStore + ?Sized>(store: &mut S, mines: &MinePlacementRecord) {
        write_json(store, MINES_KEY, mines);
    }

    pub fn store_clicks<S: KeyValueStore + ?Sized>(store: &mut S, clicks: &ReplayLog) {
        write_json(store, CLICKS_KEY, clicks);
    }

    pub fn store_start<S: KeyValueStore + ?Sized>(store: &mut S, started_at: DateTime<Utc>) {
        store.set(START_KEY, &started_at.timestamp_millis().to_string());
    }

    /// Persists the final time, keeping whichever was written first.
    pub fn store_end<S: KeyValueStore + ?Sized>(store: &mut S, elapsed_ms: u64) -> bool {
        if store.get(END_KEY).is_some() {
            return false;
        }
        store.set(END_KEY, &elapsed_ms.to_string());
        true
    }
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|err| {
        log::debug!("Unreadable save record {:?}: {}", text, err);
        GameError::CorruptSaveData
    })
}

fn write_json<S: KeyValueStore + ?Sized, T: Serialize>(store: &mut S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(text) => store.set(key, &text),
        Err(err) => log::error!("Could not serialize {}: {:?}", key, err),
    }
}
