//! Storage backends for expense records.
//!
//! [`ExpenseStore`] is the single seam the UI talks to. [`LocalStore`] keeps
//! everything in a string key-value store (browser `localStorage` in the app),
//! [`RemoteStore`] forwards every call to the expense HTTP API.

mod local;
mod remote;

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use async_trait::async_trait;

use crate::{
    error::{Result, StoreError},
    model::{CategorySummary, Expense, ExpenseDraft, MonthlySummary},
    settings::Backend,
};

pub use local::{LocalStore, EXPENSES_KEY};
pub use remote::RemoteStore;

#[async_trait(?Send)]
pub trait ExpenseStore {
    /// Short name of the backend, used in notices and logs.
    fn label(&self) -> &'static str;

    async fn list(&self) -> Result<Vec<Expense>>;

    /// Stores a new record. `None` means the backend accepted it without
    /// handing the stored record back.
    async fn add(&self, draft: ExpenseDraft) -> Result<Option<Expense>>;

    /// Returns `false` when no record had that id.
    async fn remove(&self, id: i64) -> Result<bool>;

    async fn monthly_summary(&self) -> Result<Vec<MonthlySummary>>;

    async fn category_summary(&self) -> Result<Vec<CategorySummary>>;
}

/// Handle to the active backend shared between components.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn ExpenseStore>);

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn ExpenseStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

pub fn open_store(backend: Backend, api_base_url: &str) -> StoreHandle {
    tracing::info!(?backend, api_base_url, "opening expense store");
    match backend {
        Backend::Local => StoreHandle(Rc::new(LocalStore::new(BrowserStorage))),
        Backend::Remote => StoreHandle(Rc::new(RemoteStore::new(api_base_url))),
    }
}

/// Minimal string key-value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage`; reads as empty and rejects writes when unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Storage(format!("{err:?}")))
    }
}

/// In-memory stand-in for `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_clones_share_items() {
        let storage = MemoryStorage::default();
        let other = storage.clone();
        storage.set_item("expenses", "[]").unwrap();

        assert_eq!(other.get_item("expenses").as_deref(), Some("[]"));
        assert_eq!(other.get_item("missing"), None);
    }

    #[test]
    fn handles_compare_by_identity() {
        let store = StoreHandle(Rc::new(LocalStore::new(MemoryStorage::default())));
        let same = store.clone();
        let other = StoreHandle(Rc::new(LocalStore::new(MemoryStorage::default())));

        assert!(store == same);
        assert!(store != other);
    }
}
