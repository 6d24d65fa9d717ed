//! Internationalization (i18n) module for the plugin interface.
//!
//! All language-related logic, the bundled strings, and the audit tooling
//! live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: Closed `Language` enum with validated conversion from codes
//! - `strings`: Bundled translation strings
//! - `table`: Read-only translation table with fallback lookup, audit and export
//! - `params`: `{name}` placeholder parameters and substitution
//! - `manager`: Stateful language manager, the entry point for UI code
//! - `validator`: Placeholder consistency checks across languages
//! - `metrics`: Per-manager lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{LanguageManager, LogNotifier};
//!
//! let mut i18n = LanguageManager::new(LogNotifier);
//! i18n.set_initial_language(&config.language);
//! let title = i18n.translate("settings.title", None);
//! ```

mod error;
mod language;
mod manager;
mod metrics;
mod params;
mod registry;
mod strings;
mod table;
mod validator;

pub use error::{I18nError, Result};
pub use language::{Language, LANGUAGE_COUNT};
pub use manager::{LanguageInfo, LanguageManager, LogNotifier, Notifier, FALLBACK_LANGUAGE};
pub use metrics::{LookupMetrics, MetricsReport};
pub use params::{interpolate, Params};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::{
    display_name, list_supported_languages, LanguageCoverage, TranslationEntry, TranslationTable,
};
pub use validator::{TranslationValidator, ValidationReport};
