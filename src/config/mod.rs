//! Runtime configuration loaded from the environment

use anyhow::{Context, Result};

/// Application configuration
///
/// Every field has a default so the binary runs with no environment at all.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to (`HOGE_BIND_ADDR`)
    pub bind_addr: String,

    /// Page size applied when a list request passes `limit=0`
    /// (`HOGE_DEFAULT_PAGE_SIZE`)
    pub default_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            default_page_size: crate::core::page::DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("HOGE_BIND_ADDR") {
            config.bind_addr = addr;
        }

        if let Ok(size) = std::env::var("HOGE_DEFAULT_PAGE_SIZE") {
            config.default_page_size = size
                .parse()
                .with_context(|| format!("invalid HOGE_DEFAULT_PAGE_SIZE: '{}'", size))?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.default_page_size, 10);
    }
}
