//! Error type for the fallible internals of the i18n layer.
//!
//! None of these errors escape the public display-string operations
//! (`TranslationTable::lookup`, `LanguageManager::translate`); they exist so
//! the fallback policy is decided in one place per component.

use crate::i18n::Language;

/// Errors produced while resolving a translation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// The key is not present in the translation table.
    #[error("Unknown translation key: '{0}'")]
    UnknownKey(String),

    /// The language code is not one of the supported codes.
    #[error("Unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    /// Neither the requested language nor the default language has a string.
    #[error("No '{language}' or default-language string for key '{key}'")]
    MissingTranslation { key: String, language: Language },
}

/// Alias for `Result` with [`I18nError`].
pub type Result<T> = std::result::Result<T, I18nError>;
