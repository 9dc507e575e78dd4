//! Console Configuration
//!
//! Values are baked in at build time (`WISHLIST_API_BASE`, `WISHLIST_LOG`),
//! since a static wasm bundle has no process environment to read.

use log::LevelFilter;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    /// Prefix for every REST path, e.g. "/api". Empty means same origin, no prefix.
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ConsoleConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("WISHLIST_API_BASE"), option_env!("WISHLIST_LOG"))
    }

    pub fn from_values(api_base: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_string())
                .unwrap_or_default(),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_values(None, None);
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.api_base, "");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_api_base_trailing_slash() {
        let config = ConsoleConfig::from_values(Some(" /api/ "), Some("debug"));
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_level_falls_back() {
        let config = ConsoleConfig::from_values(None, Some("loud"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
