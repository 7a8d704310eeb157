#[cfg(test)]
use std::{cell::RefCell, collections::HashMap, rc::Rc};

use anyhow;

use gloo_console::error as console_error;

// key/value access to whatever persists between visits
//
// values are stored as raw strings rather than serialized json so that the
// browser's localStorage shows exactly "dark" or "light"
pub trait PreferenceStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

// window.localStorage
//
// the storage object is looked up on every call, since it can be missing
// entirely (private browsing, disabled by policy) and we would rather log
// than panic
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> anyhow::Result<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| anyhow::Error::msg("no window"))?;

        window
            .local_storage()
            .map_err(|err| anyhow::Error::msg(format!("localStorage unavailable: {err:?}")))?
            .ok_or_else(|| anyhow::Error::msg("localStorage disabled"))
    }
}

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        let storage = Self::storage()?;

        storage.get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = Self::storage()?;

        storage.set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}

// in-memory store, also keeping the ordered history of writes
//
// clones share the same backing map, so a test can hand one copy to the
// theme controller and inspect the other
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<MemoryStoreInner>>,
}

#[cfg(test)]
#[derive(Debug, Default)]
struct MemoryStoreInner {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
    fail_writes: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = MemoryStore::default();
        store
            .inner
            .borrow_mut()
            .values
            .insert(key.to_owned(), value.to_owned());
        store
    }

    // simulates a full or disabled backend
    pub fn failing() -> Self {
        let store = MemoryStore::default();
        store.inner.borrow_mut().fail_writes = true;
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().values.get(key).cloned()
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.inner.borrow().writes.clone()
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut inner = self.inner.borrow_mut();

        if inner.fail_writes {
            return Err(anyhow::Error::msg(format!("store rejected write to {key}")));
        }

        inner.values.insert(key.to_owned(), value.to_owned());
        inner.writes.push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_and_records_writes() {
        let store = MemoryStore::default();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "a").unwrap();
        store.save("k", "b").unwrap();

        assert_eq!(store.load("k").unwrap().as_deref(), Some("b"));
        assert_eq!(
            store.writes(),
            vec![
                ("k".to_owned(), "a".to_owned()),
                ("k".to_owned(), "b".to_owned())
            ]
        );
    }

    #[test]
    fn clones_share_backing_map() {
        let store = MemoryStore::with_value("k", "v");
        let other = store.clone();

        other.save("k", "w").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("w"));
    }

    #[test]
    fn failing_store_rejects_writes() {
        let store = MemoryStore::failing();

        assert!(store.save("k", "v").is_err());
        assert!(store.writes().is_empty());
    }
}
