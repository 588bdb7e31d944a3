//! Browser-side storage and page configuration.

use anyhow::{Context, anyhow};
use cnt_storage::KeyValueStore;
use cnt_wallet_core::HomeConfig;

use crate::dom;

/// Id of the optional `<script type="application/json">` config blob.
pub const CONFIG_SCRIPT_ID: &str = "home-config";

// ── localStorage ──

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn storage() -> anyhow::Result<web_sys::Storage> {
    let window = web_sys::window().context("no global window")?;
    window
        .local_storage()
        .map_err(|e| anyhow!("localStorage is not accessible: {:?}", e))?
        .context("localStorage is not available")
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        storage()?
            .get_item(key)
            .map_err(|e| anyhow!("failed to read {key}: {:?}", e))
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("failed to write {key}: {:?}", e))
    }
}

// ── Config ──

/// Page config from the embedded JSON blob, or defaults when there is none.
/// A blob that does not parse is reported and ignored.
pub fn load_config() -> HomeConfig {
    let raw = dom::document()
        .ok()
        .and_then(|doc| dom::by_id(&doc, CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    match raw {
        Some(raw) => HomeConfig::from_json(&raw).unwrap_or_else(|e| {
            gloo_console::warn!(format!("ignoring #{CONFIG_SCRIPT_ID}: {e:#}"));
            HomeConfig::default()
        }),
        None => HomeConfig::default(),
    }
}
