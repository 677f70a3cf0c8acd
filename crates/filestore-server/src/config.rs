use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use filestore_store::StoreConfig;

use crate::error::{ServerError, ServerResult};

/// Environment variable that overrides the listening port.
pub const PORT_ENV: &str = "PORT";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Upper bound on request bodies, form and multipart alike.
    pub max_body_bytes: usize,
    pub store: StoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_body_bytes: 2 * 1024 * 1024,
            store: StoreConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read a TOML config file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Apply `PORT` from the process environment, if set.
    pub fn apply_env(&mut self) -> ServerResult<()> {
        let port = std::env::var(PORT_ENV).ok();
        self.apply_port(port.as_deref())
    }

    /// Replace the port of `bind_addr`. An empty value is ignored.
    pub fn apply_port(&mut self, port: Option<&str>) -> ServerResult<()> {
        match port.map(str::trim) {
            None | Some("") => Ok(()),
            Some(raw) => {
                let port: u16 = raw
                    .parse()
                    .map_err(|_| ServerError::Config(format!("invalid {PORT_ENV}: {raw}")))?;
                self.bind_addr.set_port(port);
                Ok(())
            }
        }
    }
}
