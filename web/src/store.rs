use gloo::storage::{LocalStorage, Storage};
use sweeper_core::KeyValueStore;

/// The browser's `localStorage`. Failures are logged and otherwise ignored, so a blocked storage only costs resume.
#[derive(Debug)]
pub(crate) struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub(crate) fn new() -> Self {
        Self {
            storage: LocalStorage::raw(),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or_else(|err| {
            log::error!("failed to read {}: {:?}", key, err);
            None
        })
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::error!("failed to write {}: {:?}", key, err);
        }
    }

    fn delete(&mut self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            log::error!("failed to remove {}: {:?}", key, err);
        }
    }
}
