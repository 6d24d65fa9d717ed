//! Translation table: read-only accessors over the bundled strings.
//!
//! Resolution order for a key is `requested language -> en-US -> key`. That
//! order lives in [`TranslationEntry::resolve`] and nowhere else.
//!
//! | Situation | Result | Logged |
//! |-----------|--------|--------|
//! | Key absent | the key itself | `warn` |
//! | Language string absent or empty | the en-US string | `debug` |
//! | en-US string absent too | the key itself | `debug` |
//! | Language code unsupported | resolved as en-US | `debug` |

use crate::i18n::params::interpolate;
use crate::i18n::strings::TRANSLATIONS;
use crate::i18n::{I18nError, Language, LanguageRegistry, Params, LANGUAGE_COUNT};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Strings for one translation key, one slot per supported language.
///
/// An empty slot means "not translated".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    strings: [&'static str; LANGUAGE_COUNT],
}

impl TranslationEntry {
    /// Create an entry from strings in [`Language::ALL`] order.
    pub const fn new(strings: [&'static str; LANGUAGE_COUNT]) -> Self {
        Self { strings }
    }

    /// The string for `language`, or `None` if absent or empty.
    pub fn get(&self, language: Language) -> Option<&'static str> {
        let value = self.strings[language.index()];
        (!value.is_empty()).then_some(value)
    }

    /// The string for `language`, falling back to the default language.
    pub fn resolve(&self, language: Language) -> Option<&'static str> {
        if let Some(value) = self.get(language) {
            return Some(value);
        }
        if language == Language::DEFAULT {
            return None;
        }

        debug!("No {} string, substituting {}", language, Language::DEFAULT);
        self.get(Language::DEFAULT)
    }
}

/// Translation coverage for one language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageCoverage {
    /// Language code
    pub language: &'static str,

    /// Number of keys in the table
    pub total: usize,

    /// Number of keys with a non-empty string for this language
    pub translated: usize,

    /// Keys without a string for this language
    pub missing: Vec<&'static str>,

    /// Translated share as a percentage (0-100)
    pub percent: f64,
}

/// Immutable key -> entry mapping.
///
/// Keys are kept sorted so audit and export output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: BTreeMap<&'static str, TranslationEntry>,
}

/// Bundled table instance (initialized lazily)
static TABLE: OnceLock<TranslationTable> = OnceLock::new();

impl TranslationTable {
    /// Get the bundled translation table.
    pub fn global() -> &'static TranslationTable {
        TABLE.get_or_init(|| TranslationTable::from_entries(TRANSLATIONS.iter().copied()))
    }

    /// Build a table from explicit entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, TranslationEntry)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn entry(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    /// All keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Resolve `key` for `language` and apply `params`.
    ///
    /// # Errors
    /// * `UnknownKey` if the key is not in the table
    /// * `MissingTranslation` if neither `language` nor the default language
    ///   has a string for the key
    pub fn try_lookup(
        &self,
        key: &str,
        language: Language,
        params: Option<&Params>,
    ) -> Result<String, I18nError> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| I18nError::UnknownKey(key.to_string()))?;

        let template = entry
            .resolve(language)
            .ok_or_else(|| I18nError::MissingTranslation {
                key: key.to_string(),
                language,
            })?;

        Ok(match params {
            Some(params) => interpolate(template, params),
            None => template.to_string(),
        })
    }

    /// Resolve `key` for a language code, never failing.
    ///
    /// Unsupported codes resolve as the default language. Unknown keys are
    /// logged and returned as-is so the caller always has display text.
    pub fn lookup(&self, key: &str, language: &str, params: Option<&Params>) -> String {
        let language = Language::from_code(language).unwrap_or_else(|e| {
            debug!("{}, using {}", e, Language::DEFAULT);
            Language::DEFAULT
        });

        match self.try_lookup(key, language, params) {
            Ok(value) => value,
            Err(I18nError::UnknownKey(_)) => {
                warn!("Translation key not found: {}", key);
                key.to_string()
            }
            Err(e) => {
                debug!("{}", e);
                key.to_string()
            }
        }
    }

    /// Keys whose entry has no string, or an empty string, for `language`.
    ///
    /// The iterator borrows the table and can be recreated any number of
    /// times with identical output.
    pub fn list_keys_missing_translation(
        &self,
        language: Language,
    ) -> impl Iterator<Item = &'static str> + '_ {
        self.entries
            .iter()
            .filter(move |(_, entry)| entry.get(language).is_none())
            .map(|(key, _)| *key)
    }

    /// Coverage summary for `language`.
    pub fn coverage(&self, language: Language) -> LanguageCoverage {
        let missing: Vec<&'static str> = self.list_keys_missing_translation(language).collect();
        let total = self.len();
        let translated = total - missing.len();
        let percent = if total > 0 {
            (translated as f64 / total as f64) * 100.0
        } else {
            100.0
        };

        LanguageCoverage {
            language: language.code(),
            total,
            translated,
            missing,
            percent,
        }
    }

    /// Serialize the table as comma-delimited text.
    ///
    /// Header `Key,<code>...` in picker order, then one row per key in sorted
    /// order. Fields containing a comma, double quote, CR or LF are quoted
    /// with inner quotes doubled (RFC 4180). Every row ends with `\n`.
    pub fn export_table_as_delimited_text(&self) -> String {
        let mut output = String::new();

        let header = std::iter::once("Key").chain(Language::ALL.into_iter().map(Language::code));
        push_row(&mut output, header);

        for (key, entry) in &self.entries {
            let cells = std::iter::once(*key)
                .chain(Language::ALL.into_iter().map(|lang| entry.get(lang).unwrap_or("")));
            push_row(&mut output, cells);
        }

        output
    }
}

/// The supported languages in picker order.
pub fn list_supported_languages() -> &'static [Language] {
    &Language::ALL
}

/// Native display name of `language` (e.g. `es-ES` -> "Español").
pub fn display_name(language: Language) -> &'static str {
    LanguageRegistry::get().config_for(language).native_name
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            output.push(',');
        }
        push_field(output, cell);
    }
    output.push('\n');
}

fn push_field(output: &mut String, field: &str) {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\r' | '\n')) {
        output.push('"');
        output.push_str(&field.replace('"', "\"\""));
        output.push('"');
    } else {
        output.push_str(field);
    }
}
