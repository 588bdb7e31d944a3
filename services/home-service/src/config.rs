use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub(crate) const ADDR_VAR: &str = "HOME_SERVICE_ADDR";
pub(crate) const WEB_DIR_VAR: &str = "HOME_WEB_DIR";

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_WEB_DIR: &str = "./web";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceConfig {
    pub(crate) addr: SocketAddr,
    /// Root holding `templates/`, `static/` and the built `pkg/`.
    pub(crate) web_dir: PathBuf,
}

impl ServiceConfig {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let addr_raw = value(ADDR_VAR, DEFAULT_ADDR);
        let addr = addr_raw
            .parse::<SocketAddr>()
            .with_context(|| format!("{ADDR_VAR} is not a socket address: {addr_raw}"))?;

        Ok(Self {
            addr,
            web_dir: PathBuf::from(value(WEB_DIR_VAR, DEFAULT_WEB_DIR)),
        })
    }

    pub(crate) fn template_path(&self) -> PathBuf {
        self.web_dir.join("templates").join("home.html")
    }

    pub(crate) fn static_dir(&self, name: &str) -> PathBuf {
        self.web_dir.join("static").join(name)
    }

    pub(crate) fn pkg_dir(&self) -> PathBuf {
        self.web_dir.join("pkg")
    }
}
