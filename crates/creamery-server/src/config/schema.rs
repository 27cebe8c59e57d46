use std::net::SocketAddr;

use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default = "default_server")]
    pub server: ListenSection,

    #[serde(default = "default_metrics")]
    pub metrics: ListenSection,

    #[serde(default)]
    pub catalog: CatalogSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: default_server(),
            metrics: default_metrics(),
            catalog: CatalogSection::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AppError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        let api = self.server.listen_addr("server")?;
        let metrics = self.metrics.listen_addr("metrics")?;
        if api == metrics {
            return Err(AppError::Config(
                "server.listen and metrics.listen must differ".into(),
            ));
        }

        Ok(())
    }
}

/// A single listener address.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenSection {
    pub listen: String,
}

impl ListenSection {
    /// Parse `listen`; `section` names the owner in the error message.
    pub fn listen_addr(&self, section: &str) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            AppError::Config(format!(
                "{section}.listen must be a valid socket address ({}): {e}",
                self.listen
            ))
        })
    }
}

fn default_server() -> ListenSection {
    ListenSection {
        listen: "0.0.0.0:8000".into(),
    }
}
fn default_metrics() -> ListenSection {
    ListenSection {
        listen: "0.0.0.0:8001".into(),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogSection {
    /// Start with the three built-in flavors.
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

fn default_seed() -> bool {
    true
}
