//! Translation quality validation module.
//!
//! Checks that every translated string keeps the placeholders of its en-US
//! source string. A dropped or renamed placeholder is an error: the value
//! would silently vanish from the rendered text, or the raw `{name}` token
//! would be shown to the user.

use crate::i18n::{Language, TranslationEntry, TranslationTable};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Placeholder mismatches between a translation and its source string
    pub errors: Vec<String>,

    /// Missing translations and suspicious brace usage
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation quality.
pub struct TranslationValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every entry of `table`.
    pub fn validate_table(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        for key in table.keys() {
            if let Some(entry) = table.entry(key) {
                report.merge(Self::validate_entry(key, entry));
            }
        }
        report
    }

    /// Validate one entry against its canonical string.
    ///
    /// This function checks that:
    /// - the canonical (en-US) string exists
    /// - each translation has exactly the canonical placeholder names
    /// - each string has balanced braces
    pub fn validate_entry(key: &str, entry: &TranslationEntry) -> ValidationReport {
        let mut report = ValidationReport::new();

        let Some(source) = entry.get(Language::DEFAULT) else {
            report
                .errors
                .push(format!("{}: no {} source string", key, Language::DEFAULT));
            return report;
        };
        let source_placeholders = Self::extract_placeholders(source);

        for language in Language::ALL {
            let Some(text) = entry.get(language) else {
                report
                    .warnings
                    .push(format!("{}: missing {} translation", key, language));
                continue;
            };

            if !Self::braces_balanced(text) {
                report
                    .warnings
                    .push(format!("{}: unbalanced braces in {} string", key, language));
            }

            if language == Language::DEFAULT {
                continue;
            }

            let placeholders = Self::extract_placeholders(text);
            if placeholders != source_placeholders {
                report.errors.push(format!(
                    "{}: placeholder mismatch in {}: source has {:?}, translation has {:?}",
                    key, language, source_placeholders, placeholders
                ));
            }
        }

        report
    }

    /// Extract the set of `{name}` placeholder names from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid")
        });

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    fn braces_balanced(text: &str) -> bool {
        let mut depth: i32 = 0;
        for c in text.chars() {
            match c {
                '{' => depth += 1,
                '}' => depth -= 1,
                _ => {}
            }
            if depth < 0 || depth > 1 {
                return false;
            }
        }
        depth == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with(en: &'static str, others: &'static str) -> TranslationEntry {
        TranslationEntry::new([en, others, others, others, others, others, others, others])
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_multiple() {
        let names = TranslationValidator::extract_placeholders("Renamed {oldName} to {newName}");
        let expected: BTreeSet<String> =
            ["newName", "oldName"].iter().map(|s| s.to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("Confirm").is_empty());
    }

    #[test]
    fn test_extract_placeholders_reordered_is_equal() {
        let a = TranslationValidator::extract_placeholders("{a} then {b}");
        let b = TranslationValidator::extract_placeholders("{b} avant {a}");
        assert_eq!(a, b);
    }

    // ==================== Brace Balance Tests ====================

    #[test]
    fn test_braces_balanced() {
        assert!(TranslationValidator::braces_balanced("{a} and {b}"));
        assert!(TranslationValidator::braces_balanced("no braces"));
        assert!(!TranslationValidator::braces_balanced("{a"));
        assert!(!TranslationValidator::braces_balanced("a}"));
        assert!(!TranslationValidator::braces_balanced("{{a}}"));
    }

    // ==================== Entry Validation Tests ====================

    #[test]
    fn test_validate_entry_clean() {
        let entry = entry_with("File deleted: {filename}", "Gelöscht: {filename}");
        let report = TranslationValidator::validate_entry("notices.fileDeleted", &entry);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_entry_placeholder_mismatch() {
        let entry = entry_with("File deleted: {filename}", "Gelöscht: {datei}");
        let report = TranslationValidator::validate_entry("notices.fileDeleted", &entry);
        assert!(report.has_errors());
        assert_eq!(report.errors.len(), 7);
        assert!(report.errors[0].contains("placeholder mismatch"));
    }

    #[test]
    fn test_validate_entry_missing_translation_is_warning() {
        let entry = TranslationEntry::new(["Confirm", "", "確認", "確認", "Bestätigen", "Confirmer", "Подтвердить", "Confirmar"]);
        let report = TranslationValidator::validate_entry("common.confirm", &entry);
        assert!(!report.has_errors());
        assert_eq!(report.warnings, vec!["common.confirm: missing zh-CN translation"]);
    }

    #[test]
    fn test_validate_entry_missing_source_is_error() {
        let entry = entry_with("", "Bestätigen");
        let report = TranslationValidator::validate_entry("common.confirm", &entry);
        assert_eq!(report.errors, vec!["common.confirm: no en-US source string"]);
    }

    #[test]
    fn test_validate_entry_unbalanced_brace_warning() {
        let entry = entry_with("Value: {value}", "Wert: {value");
        let report = TranslationValidator::validate_entry("x.value", &entry);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("unbalanced braces"));
    }

    // ==================== Table Validation Tests ====================

    #[test]
    fn test_bundled_table_is_clean() {
        let report = TranslationValidator::validate_table(TranslationTable::global());
        assert!(report.is_clean(), "{:?}", report);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_default_is_clean() {
        let report = ValidationReport::default();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_serializes() {
        let mut report = ValidationReport::new();
        report.errors.push("e".to_string());
        let json = serde_json::to_string(&report).expect("Should serialize");
        assert_eq!(json, r#"{"errors":["e"],"warnings":[]}"#);
    }
}
