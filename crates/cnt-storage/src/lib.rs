use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

pub mod number;

pub use number::{format_number, parse_number};

/// Storage key the balance lives under.
pub const BALANCE_KEY: &str = "balance";

/// Origin-scoped text key-value storage (browser `localStorage` or a fake).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Shared in-memory store. Clones see the same entries, the way every script
/// on one origin sees the same `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Reads and writes the single balance scalar.
///
/// No validation happens here: `read` may return `NaN` or a negative number
/// and `write` stores whatever it is given.
#[derive(Clone, Debug)]
pub struct BalanceStore<S> {
    backend: S,
    key: String,
}

impl<S> BalanceStore<S>
where
    S: KeyValueStore,
{
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, BALANCE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Absent entries read as `"0"`; malformed text reads as `NaN`.
    pub fn read(&self) -> Result<f64> {
        let raw = self.backend.get_item(&self.key)?;
        let value = parse_number(raw.as_deref().unwrap_or("0"));
        debug!(key = %self.key, raw = ?raw, value, "read balance");
        Ok(value)
    }

    pub fn write(&self, value: f64) -> Result<()> {
        let text = format_number(value);
        debug!(key = %self.key, %text, "write balance");
        self.backend.set_item(&self.key, &text)
    }
}
