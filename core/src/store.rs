use alloc::string::{String, ToString};
use hashbrown::HashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::*;

/// Opaque string store the game persists into, such as the browser's local storage.
///
/// Writes are fire-and-forget: implementations report their own failures.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// Fixed store key for a value persisted as JSON.
pub trait StorageKey {
    const KEY: &'static str;
}

pub trait StoreExt: KeyValueStore {
    /// `Ok(None)` when nothing is stored, [`GameError::CorruptSaveData`] when the stored text does not parse.
    fn load<T: StorageKey + DeserializeOwned>(&self) -> Result<Option<T>> {
        self.get(T::KEY)
            .map(|text| serde_json::from_str(&text).map_err(|_| GameError::CorruptSaveData))
            .transpose()
    }

    fn load_or_default<T: StorageKey + DeserializeOwned + Default>(&self) -> T {
        self.load::<T>().unwrap_or_else(|err| {
            log::warn!("Discarding stored {}: {}", T::KEY, err);
            None
        })
        .unwrap_or_default()
    }

    fn save<T: StorageKey + Serialize>(&mut self, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => self.set(T::KEY, &text),
            Err(err) => log::error!("Could not serialize {}: {:?}", T::KEY, err),
        }
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}

/// In-memory store, used where no browser storage exists.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_gets_sets_and_deletes() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);

        store.set("a", "1");
        store.set("a", "2");
        assert_eq!(store.get("a").as_deref(), Some("2"));
        assert_eq!(store.len(), 1);

        store.delete("a");
        assert!(store.is_empty());
    }

    #[test]
    fn typed_values_round_trip() {
        let mut store = MemoryStore::new();
        let settings = DifficultySettings::tiers(MineTier::Easy, SizeTier::Large, SizeTier::Tiny);

        store.save(&settings);

        assert_eq!(store.load::<DifficultySettings>(), Ok(Some(settings)));
    }

    #[test]
    fn unparsable_value_is_corrupt_and_defaults() {
        let mut store = MemoryStore::new();
        store.set(DifficultySettings::KEY, "{not json");

        assert_eq!(
            store.load::<DifficultySettings>(),
            Err(GameError::CorruptSaveData)
        );
        assert_eq!(
            store.load_or_default::<DifficultySettings>(),
            DifficultySettings::default()
        );
    }
}
