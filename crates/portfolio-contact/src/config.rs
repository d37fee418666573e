use std::path::PathBuf;

pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Where the contact form sends submissions, and where preferences live.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub relay_url: String,
    pub access_key: String,
    pub backend_url: String,
    pub prefs_path: PathBuf,
}

impl ContactConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            relay_url: lookup("PORTFOLIO_RELAY_URL").unwrap_or_else(|| DEFAULT_RELAY_URL.into()),
            access_key: lookup("PORTFOLIO_RELAY_ACCESS_KEY").unwrap_or_default(),
            backend_url: lookup("PORTFOLIO_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.into()),
            prefs_path: lookup("PORTFOLIO_PREFS_PATH")
                .unwrap_or_else(|| "portfolio-prefs.json".into())
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ContactConfig::from_lookup(|_| None);
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert!(config.access_key.is_empty());
        assert_eq!(config.prefs_path, PathBuf::from("portfolio-prefs.json"));
    }

    #[test]
    fn env_overrides() {
        let config = ContactConfig::from_lookup(|key| match key {
            "PORTFOLIO_RELAY_ACCESS_KEY" => Some("abc-123".into()),
            "PORTFOLIO_BACKEND_URL" => Some("https://api.example.com".into()),
            _ => None,
        });
        assert_eq!(config.access_key, "abc-123");
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
    }
}
