/// Synchronous string key-value store backing the visitor's preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`. Reads return `None` and writes are dropped when the
/// storage is unavailable (private mode, non-browser targets).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                tracing::debug!(key, "localStorage unavailable, preference not saved");
                return;
            };
            let _ = storage.set_item(key, value);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_storage_is_empty_off_browser() {
        LocalStorage.save("portfolio_theme", "light");
        assert_eq!(LocalStorage.load("portfolio_theme"), None);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::default();
        let view = store.clone();
        store.save("k", "v");
        assert_eq!(view.load("k").as_deref(), Some("v"));
        assert_eq!(view.writes(), 1);
    }
}
