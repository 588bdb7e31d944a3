//! Click actions with no shared state: the agreement panel toggle and the
//! external link.

use anyhow::Result;
use tracing::info;

use crate::config::HomeConfig;
use crate::surface::{ClassList, Navigator};

/// Shows and hides a panel through a marker class.
#[derive(Clone, Debug)]
pub struct AgreementPanel<P> {
    panel: P,
    hidden_class: String,
}

impl<P> AgreementPanel<P>
where
    P: ClassList,
{
    pub fn new(panel: P, hidden_class: impl Into<String>) -> Self {
        Self {
            panel,
            hidden_class: hidden_class.into(),
        }
    }

    pub fn from_config(panel: P, config: &HomeConfig) -> Self {
        Self::new(panel, config.hidden_class.clone())
    }

    pub fn show(&self) -> Result<()> {
        self.panel.remove_class(&self.hidden_class)
    }

    pub fn hide(&self) -> Result<()> {
        self.panel.add_class(&self.hidden_class)
    }

    pub fn is_visible(&self) -> bool {
        !self.panel.has_class(&self.hidden_class)
    }
}

/// Leaves the page for a fixed URL without adding a history entry.
#[derive(Clone, Debug)]
pub struct ExternalLink<N> {
    navigator: N,
    url: String,
}

impl<N> ExternalLink<N>
where
    N: Navigator,
{
    pub fn new(navigator: N, url: impl Into<String>) -> Self {
        Self {
            navigator,
            url: url.into(),
        }
    }

    pub fn from_config(navigator: N, config: &HomeConfig) -> Self {
        Self::new(navigator, config.navigate_url.clone())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn follow(&self) -> Result<()> {
        info!(url = %self.url, "leaving home page");
        self.navigator.replace(&self.url)
    }
}
