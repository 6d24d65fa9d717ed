use anyhow::{Context, Result};
use std::env::{self, VarError};

/// Language applied when `PLUGIN_LANGUAGE` is not set.
const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone)]
pub struct Config {
    // Persisted interface language, applied via `set_initial_language`.
    // Not validated here: unsupported codes degrade to the fallback language.
    pub language: String,

    // Audit tooling
    pub export_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            export_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            language: optional_var("PLUGIN_LANGUAGE")?
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            export_path: optional_var("I18N_EXPORT_PATH")?,
        })
    }
}

fn optional_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{} is not valid UTF-8", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("PLUGIN_LANGUAGE");
        env::remove_var("I18N_EXPORT_PATH");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load");
        assert_eq!(config.language, "en-US");
        assert_eq!(config.export_path, None);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_values() {
        clear_env();
        env::set_var("PLUGIN_LANGUAGE", "fr-FR");
        env::set_var("I18N_EXPORT_PATH", "translations.csv");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.language, "fr-FR");
        assert_eq!(config.export_path.as_deref(), Some("translations.csv"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_keeps_unsupported_language() {
        clear_env();
        env::set_var("PLUGIN_LANGUAGE", "xx-XX");

        let config = Config::from_env().expect("Unsupported codes are not a config error");
        assert_eq!(config.language, "xx-XX");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_blank_language_uses_default() {
        clear_env();
        env::set_var("PLUGIN_LANGUAGE", "  ");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.language, "en-US");

        clear_env();
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.language, "en-US");
        assert!(config.export_path.is_none());
    }
}
