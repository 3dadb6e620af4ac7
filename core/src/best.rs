use alloc::format;
use alloc::string::{String, ToString};

use crate::*;

/// Identifies a best-time slot. Only exists for all-preset difficulties.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BestTimeKey {
    pub mines: MineTier,
    pub width: SizeTier,
    pub height: SizeTier,
}

impl BestTimeKey {
    pub fn store_key(&self) -> String {
        format!("sweeper:best:{}-{}-{}", self.mines, self.width, self.height)
    }
}

/// Best winning times in milliseconds, kept in the game's key-value store.
pub struct BestTimes;

impl BestTimes {
    /// `None` when no time has been recorded yet, which compares as infinitely slow.
    pub fn get<S: KeyValueStore + ?Sized>(store: &S, key: BestTimeKey) -> Option<u64> {
        let text = store.get(&key.store_key())?;
        match text.parse() {
            Ok(ms) => Some(ms),
            Err(_) => {
                log::warn!("Ignoring unreadable best time {:?} for {:?}", text, key);
                None
            }
        }
    }

    /// Stores `elapsed_ms` if it beats the current best. Returns whether it did.
    pub fn record<S: KeyValueStore + ?Sized>(store: &mut S, key: BestTimeKey, elapsed_ms: u64) -> bool {
        match Self::get(store, key) {
            Some(best) if best <= elapsed_ms => false,
            previous => {
                log::debug!("New best time for {:?}: {} ms (was {:?})", key, elapsed_ms, previous);
                store.set(&key.store_key(), &elapsed_ms.to_string());
                true
            }
        }
    }
}
