pub mod audit;
pub mod config;
pub mod i18n;

pub use i18n::{
    I18nError, Language, LanguageInfo, LanguageManager, LogNotifier, Notifier, Params,
    TranslationTable, TranslationValidator,
};
