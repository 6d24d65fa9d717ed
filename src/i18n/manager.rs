//! Language manager: owns the current language and resolves display strings.
//!
//! One manager is created by the host at startup and handed to everything
//! that renders text. There is no global "current language".
//!
//! # Example
//!
//! ```
//! use plugin_i18n::{LanguageManager, LogNotifier, Params};
//!
//! let mut i18n = LanguageManager::new(LogNotifier);
//! assert_eq!(i18n.translate("common.confirm", None), "Confirm");
//!
//! i18n.set_current_language("zh-CN");
//! assert_eq!(i18n.translate("common.confirm", None), "确认");
//!
//! let params = Params::new().with("filename", "a.pdf");
//! assert_eq!(
//!     i18n.translate("notices.fileDeleted", Some(&params)),
//!     "文件已删除：a.pdf"
//! );
//! ```

use crate::config::Config;
use crate::i18n::table::display_name;
use crate::i18n::{
    list_supported_languages, I18nError, Language, LookupMetrics, MetricsReport, Params,
    TranslationTable,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Language used when a requested language is unsupported or a lookup fails.
pub const FALLBACK_LANGUAGE: Language = Language::DEFAULT;

/// Key of the notice shown after a user-initiated language change.
const LANGUAGE_CHANGED_KEY: &str = "notices.languageChanged";

/// User-visible notification surface provided by the host (toasts, status
/// bar messages).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Notifier that writes messages to the log. Used when no UI is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Display metadata for one supported language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    /// Language code (e.g., "de-DE")
    pub code: &'static str,

    /// Name of the language in English (e.g., "German")
    pub english_name: &'static str,

    /// Name of the language in itself (e.g., "Deutsch")
    pub native_name: &'static str,
}

/// English name of a language.
fn english_name(language: Language) -> &'static str {
    match language {
        Language::EnUs => "English",
        Language::ZhCn => "Simplified Chinese",
        Language::ZhTw => "Traditional Chinese",
        Language::JaJp => "Japanese",
        Language::DeDe => "German",
        Language::FrFr => "French",
        Language::RuRu => "Russian",
        Language::EsEs => "Spanish",
    }
}

/// Stateful facade over a [`TranslationTable`].
pub struct LanguageManager<'t> {
    table: &'t TranslationTable,
    current: Language,
    notifier: Box<dyn Notifier>,
    metrics: LookupMetrics,
}

impl LanguageManager<'static> {
    /// Create a manager over the bundled table, starting in the default
    /// language.
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        LanguageManager::with_table(TranslationTable::global(), notifier)
    }

    /// Create a manager and apply the configured language without notifying.
    pub fn from_config(config: &Config, notifier: impl Notifier + 'static) -> Self {
        let mut manager = LanguageManager::new(notifier);
        manager.set_initial_language(&config.language);
        manager
    }
}

impl<'t> LanguageManager<'t> {
    /// Create a manager over `table`, starting in the default language.
    pub fn with_table(table: &'t TranslationTable, notifier: impl Notifier + 'static) -> Self {
        Self {
            table,
            current: Language::DEFAULT,
            notifier: Box::new(notifier),
            metrics: LookupMetrics::new(),
        }
    }

    /// Check whether `candidate` is a supported language code.
    ///
    /// Callers validate persisted or user input with this before calling
    /// the setters.
    pub fn is_supported(candidate: &str) -> bool {
        Language::from_code(candidate).is_ok()
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Switch language in response to a user action.
    ///
    /// A supported code is adopted and announced through the notifier, in
    /// the new language. An unsupported code resets to the fallback
    /// language with a warning and no notification.
    pub fn set_current_language(&mut self, code: &str) {
        let Some(language) = self.apply_language(code) else {
            return;
        };

        info!("Language changed to {}", language);
        let params = Params::new().with("language", display_name(language));
        let message = self.translate(LANGUAGE_CHANGED_KEY, Some(&params));
        self.notifier.notify(&message);
    }

    /// Apply a persisted language at startup. Same validation as
    /// [`set_current_language`](Self::set_current_language), never notifies.
    pub fn set_initial_language(&mut self, code: &str) {
        if let Some(language) = self.apply_language(code) {
            debug!("Initial language set to {}", language);
        }
    }

    fn apply_language(&mut self, code: &str) -> Option<Language> {
        match Language::from_code(code) {
            Ok(language) => {
                self.current = language;
                Some(language)
            }
            Err(e) => {
                warn!("{}, falling back to {}", e, FALLBACK_LANGUAGE);
                self.current = FALLBACK_LANGUAGE;
                None
            }
        }
    }

    /// Resolve `key` in the current language. Never fails.
    ///
    /// Unknown keys are logged and shown as the key. Any other resolution
    /// failure is retried once against the fallback language before falling
    /// back to the key.
    pub fn translate(&self, key: &str, params: Option<&Params>) -> String {
        self.metrics.record_lookup();

        match self.table.try_lookup(key, self.current, params) {
            Ok(value) => value,
            Err(I18nError::UnknownKey(_)) => {
                warn!("Translation key not found: {}", key);
                self.metrics.record_unknown_key();
                self.metrics.record_key_fallback();
                key.to_string()
            }
            Err(e) => {
                debug!("{}, retrying with {}", e, FALLBACK_LANGUAGE);
                self.metrics.record_fallback_retry();
                self.table
                    .try_lookup(key, FALLBACK_LANGUAGE, params)
                    .unwrap_or_else(|e| {
                        debug!("{}", e);
                        self.metrics.record_key_fallback();
                        key.to_string()
                    })
            }
        }
    }

    /// Code, English name and native name of every supported language, in
    /// picker order.
    pub fn list_language_info(&self) -> Vec<LanguageInfo> {
        list_supported_languages()
            .iter()
            .map(|&language| LanguageInfo {
                code: language.code(),
                english_name: english_name(language),
                native_name: display_name(language),
            })
            .collect()
    }

    /// Snapshot of this manager's lookup counters.
    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}
