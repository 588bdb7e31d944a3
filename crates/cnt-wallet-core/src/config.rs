use anyhow::{Result, bail};
use cnt_storage::BALANCE_KEY;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED_BALANCE: f64 = 1_000_000.0;
pub const DEFAULT_NAVIGATE_URL: &str = "https://www.youtube.com/watch?v=xvFZjo5PgG0";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";

/// DOM ids the home page script binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub wallet: String,
    pub navigate_button: String,
    pub show_agreement_button: String,
    pub accept_button: String,
    pub agreement_panel: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            wallet: "wallet".to_owned(),
            navigate_button: "blackjack-btn".to_owned(),
            show_agreement_button: "user-agreement-btn".to_owned(),
            accept_button: "accept-btn".to_owned(),
            agreement_panel: "user-agreement".to_owned(),
        }
    }
}

impl ElementIds {
    pub fn all(&self) -> [&str; 5] {
        [
            self.wallet.as_str(),
            self.navigate_button.as_str(),
            self.show_agreement_button.as_str(),
            self.accept_button.as_str(),
            self.agreement_panel.as_str(),
        ]
    }

    /// First id the document does not contain, if any.
    pub fn first_missing<F>(&self, exists: F) -> Option<&str>
    where
        F: Fn(&str) -> bool,
    {
        self.all().into_iter().find(|id| !exists(id))
    }
}

/// Page configuration. Every field has a default, so a page may override any
/// subset through an embedded JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub storage_key: String,
    pub seed_balance: f64,
    pub navigate_url: String,
    pub hidden_class: String,
    pub element_ids: ElementIds,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            storage_key: BALANCE_KEY.to_owned(),
            seed_balance: DEFAULT_SEED_BALANCE,
            navigate_url: DEFAULT_NAVIGATE_URL.to_owned(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
            element_ids: ElementIds::default(),
        }
    }
}

impl HomeConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: HomeConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            bail!("storage_key cannot be empty");
        }
        // a zero seed would be re-seeded on every load
        if !self.seed_balance.is_finite() || self.seed_balance <= 0.0 {
            bail!("seed_balance must be a positive number");
        }
        if self.navigate_url.trim().is_empty() {
            bail!("navigate_url cannot be empty");
        }
        if self.hidden_class.trim().is_empty() || self.hidden_class.contains(char::is_whitespace) {
            bail!("hidden_class must be a single class name");
        }
        Ok(())
    }
}
