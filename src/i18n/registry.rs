//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a static array ordered the way language pickers display
//! it. The order is part of the public contract and must not change.

use crate::i18n::{Language, LANGUAGE_COUNT};

/// Configuration for a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// The enumerated language this entry describes
    pub language: Language,

    /// Language code (e.g., "en-US", "zh-CN")
    pub code: &'static str,

    /// Native name of the language (e.g., "English", "Español")
    pub native_name: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: [LanguageConfig; LANGUAGE_COUNT],
}

static REGISTRY: LanguageRegistry = LanguageRegistry {
    languages: [
        LanguageConfig {
            language: Language::EnUs,
            code: "en-US",
            native_name: "English",
            is_canonical: true,
        },
        LanguageConfig {
            language: Language::ZhCn,
            code: "zh-CN",
            native_name: "简体中文",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::ZhTw,
            code: "zh-TW",
            native_name: "繁體中文",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::JaJp,
            code: "ja-JP",
            native_name: "日本語",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::DeDe,
            code: "de-DE",
            native_name: "Deutsch",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::FrFr,
            code: "fr-FR",
            native_name: "Français",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::RuRu,
            code: "ru-RU",
            native_name: "Русский",
            is_canonical: false,
        },
        LanguageConfig {
            language: Language::EsEs,
            code: "es-ES",
            native_name: "Español",
            is_canonical: false,
        },
    ],
};

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        &REGISTRY
    }

    /// Get the configuration for a language. Total over the enum.
    pub fn config_for(&self, language: Language) -> &LanguageConfig {
        &self.languages[language.index()]
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages in picker order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the source language for all strings and the
    /// target of every fallback. If the table were ever edited to mark no
    /// entry canonical, the first entry is used.
    pub fn canonical(&self) -> &LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .unwrap_or(&self.languages[0])
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_order_matches_language_all() {
        let registry = LanguageRegistry::get();
        let languages: Vec<Language> = registry.list_all().iter().map(|c| c.language).collect();
        assert_eq!(languages, Language::ALL.to_vec());
    }

    #[test]
    fn test_list_all_codes_in_picker_order() {
        let codes: Vec<&str> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|config| config.code)
            .collect();
        assert_eq!(
            codes,
            vec!["en-US", "zh-CN", "zh-TW", "ja-JP", "de-DE", "fr-FR", "ru-RU", "es-ES"]
        );
    }

    #[test]
    fn test_config_for_is_indexed_by_language() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            assert_eq!(registry.config_for(language).language, language);
        }
    }

    #[test]
    fn test_get_by_code_spanish() {
        let config = LanguageRegistry::get()
            .get_by_code("es-ES")
            .expect("es-ES should be registered");
        assert_eq!(config.language, Language::EsEs);
        assert_eq!(config.native_name, "Español");
        assert!(!config.is_canonical);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("xx-XX").is_none());
    }

    #[test]
    fn test_canonical_returns_english() {
        let canonical = LanguageRegistry::get().canonical();
        assert_eq!(canonical.code, "en-US");
        assert!(canonical.is_canonical);
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("fr-FR"));
        assert!(!registry.is_supported("fr"));
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn test_native_names_are_non_empty() {
        for config in LanguageRegistry::get().list_all() {
            assert!(!config.native_name.is_empty(), "{} has no native name", config.code);
        }
    }
}
