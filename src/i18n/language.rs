//! Language type: the closed set of interface languages.
//!
//! `Language` is a plain enum so every per-language table can be indexed
//! without a fallible lookup. Conversions from free-form strings go through
//! the registry and are the only place an unsupported code can appear.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;

/// Number of supported languages.
pub const LANGUAGE_COUNT: usize = 8;

/// A supported interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    /// `en-US`
    EnUs,
    /// `zh-CN`
    ZhCn,
    /// `zh-TW`
    ZhTw,
    /// `ja-JP`
    JaJp,
    /// `de-DE`
    DeDe,
    /// `fr-FR`
    FrFr,
    /// `ru-RU`
    RuRu,
    /// `es-ES`
    EsEs,
}

impl Language {
    /// The default language, used whenever a requested language or string
    /// is unavailable.
    pub const DEFAULT: Language = Language::EnUs;

    /// Every supported language, in picker order.
    pub const ALL: [Language; LANGUAGE_COUNT] = [
        Language::EnUs,
        Language::ZhCn,
        Language::ZhTw,
        Language::JaJp,
        Language::DeDe,
        Language::FrFr,
        Language::RuRu,
        Language::EsEs,
    ];

    /// Create a Language from a language code string.
    ///
    /// Matching is exact (`"zh-CN"`, not `"zh-cn"` or `"zh"`), since codes
    /// come from persisted settings written by this plugin.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is one of the supported codes
    /// * `Err(I18nError::UnsupportedLanguage)` otherwise
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| config.language)
            .ok_or_else(|| I18nError::UnsupportedLanguage(code.to_string()))
    }

    /// Get the canonical (source) language all strings are authored in.
    pub fn canonical() -> Language {
        LanguageRegistry::get().canonical().language
    }

    /// Position of this language in [`Language::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the language code (e.g., "en-US", "zh-TW").
    pub fn code(self) -> &'static str {
        self.config().code
    }

    /// Get the registry entry for this language.
    pub fn config(self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(self)
    }

    /// Get the self-referential display name (e.g., "Español").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(self) -> bool {
        self.config().is_canonical
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en-US").expect("Should succeed");
        assert_eq!(language, Language::EnUs);
        assert_eq!(language.code(), "en-US");
    }

    #[test]
    fn test_from_code_every_supported_code() {
        for code in [
            "en-US", "zh-CN", "zh-TW", "ja-JP", "de-DE", "fr-FR", "ru-RU", "es-ES",
        ] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx-XX");
        assert_eq!(
            result,
            Err(I18nError::UnsupportedLanguage("xx-XX".to_string()))
        );
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("zh-cn").is_err());
        assert!(Language::from_code("zh").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_from_str_matches_from_code() {
        let parsed: Language = "ru-RU".parse().expect("Should parse");
        assert_eq!(parsed, Language::RuRu);
    }

    // ==================== canonical Tests ====================

    #[test]
    fn test_canonical_returns_english() {
        let canonical = Language::canonical();
        assert_eq!(canonical, Language::EnUs);
        assert_eq!(canonical, Language::DEFAULT);
        assert!(canonical.is_canonical());
    }

    #[test]
    fn test_only_english_is_canonical() {
        let canonical: Vec<Language> = Language::ALL
            .into_iter()
            .filter(|lang| lang.is_canonical())
            .collect();
        assert_eq!(canonical, vec![Language::EnUs]);
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_index_matches_position_in_all() {
        for (position, language) in Language::ALL.iter().enumerate() {
            assert_eq!(language.index(), position);
        }
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::ZhTw.to_string(), "zh-TW");
        assert_eq!(format!("{}", Language::EsEs), "es-ES");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::EnUs);
    }

    #[test]
    fn test_native_name() {
        assert_eq!(Language::EsEs.native_name(), "Español");
        assert_eq!(Language::JaJp.native_name(), "日本語");
    }
}
