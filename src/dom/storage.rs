//! `localStorage`-backed preference store.

use web_sys::Storage;

use crate::error::StorageError;
use crate::state::theme::PreferenceStore;

/// Wraps `window.localStorage`. When storage is unavailable (privacy mode,
/// sandboxed iframe) reads return nothing and writes report an error.
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn open() -> Self {
        let inner = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
            None => None,
        };
        Self { inner }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.inner.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = self.inner.as_ref() else {
            return Err(StorageError("localStorage unavailable".to_owned()));
        };
        storage.set_item(key, value).map_err(|err| StorageError(format!("{err:?}")))
    }
}
