use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. `PORT` keeps its conventional
    /// unprefixed name so hosting platforms can inject it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| {
                info!("{key} not set, using default: {default}");
                default.to_string()
            })
        };

        let host = var("PORTFOLIO_HOST", "0.0.0.0");
        let port = var("PORT", "3000")
            .parse()
            .context("PORT must be a valid port number")?;
        let db_path = var("PORTFOLIO_DB_PATH", "portfolio.db").into();

        Ok(Self { host, port, db_path })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path, PathBuf::from("portfolio.db"));
        assert_eq!(config.addr().unwrap(), "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PORTFOLIO_HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PORTFOLIO_DB_PATH", "/tmp/contacts.db"),
        ]))
        .unwrap();
        assert_eq!(config.addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.db_path, PathBuf::from("/tmp/contacts.db"));
    }

    #[test]
    fn bad_port_is_an_error() {
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }
}
