use std::time::Duration;

use anyhow::{bail, Result};

use crate::i18n::LanguageRegistry;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub database_path: String,

    // Localization
    pub default_language: String,

    // Messaging
    pub translation_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language =
            std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "en".to_string());
        if !LanguageRegistry::get().is_enabled(&default_language) {
            bail!(
                "DEFAULT_LANGUAGE '{}' is not a supported language",
                default_language
            );
        }

        Ok(Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/parentconnect.db".to_string()),

            default_language,

            translation_delay_ms: std::env::var("TRANSLATION_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        })
    }

    /// Simulated translation latency as a `Duration`.
    pub fn translation_delay(&self) -> Duration {
        Duration::from_millis(self.translation_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("DATABASE_PATH");
        std::env::remove_var("DEFAULT_LANGUAGE");
        std::env::remove_var("TRANSLATION_DELAY_MS");

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.database_path, "data/parentconnect.db");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.translation_delay_ms, 1000);
        assert_eq!(config.translation_delay(), Duration::from_millis(1000));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("DATABASE_PATH", "/tmp/test.db");
        std::env::set_var("DEFAULT_LANGUAGE", "gu");
        std::env::set_var("TRANSLATION_DELAY_MS", "250");

        let config = Config::from_env().expect("overrides should load");
        assert_eq!(config.database_path, "/tmp/test.db");
        assert_eq!(config.default_language, "gu");
        assert_eq!(config.translation_delay_ms, 250);

        std::env::remove_var("DATABASE_PATH");
        std::env::remove_var("DEFAULT_LANGUAGE");
        std::env::remove_var("TRANSLATION_DELAY_MS");
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unsupported_language() {
        std::env::set_var("DEFAULT_LANGUAGE", "de");

        let result = Config::from_env();
        assert!(result.is_err());

        std::env::remove_var("DEFAULT_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_malformed_delay_falls_back() {
        std::env::set_var("TRANSLATION_DELAY_MS", "soon");

        let config = Config::from_env().expect("should load");
        assert_eq!(config.translation_delay_ms, 1000);

        std::env::remove_var("TRANSLATION_DELAY_MS");
    }
}
