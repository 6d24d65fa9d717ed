//! Translation maintenance helpers behind the `i18n-audit` binary.

use crate::i18n::{list_supported_languages, Language, LanguageCoverage, Params, TranslationTable};
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the delimited-text export of `table` to `path`.
pub fn write_export(table: &TranslationTable, path: &Path) -> Result<()> {
    let export = table.export_table_as_delimited_text();
    fs::write(path, export)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;

    info!("✓ Exported {} keys to {}", table.len(), path.display());
    Ok(())
}

/// Missing keys per language code, for `languages` (or all languages when
/// empty). Languages with nothing missing are included with an empty list.
pub fn missing_by_language(
    table: &TranslationTable,
    languages: &[Language],
) -> BTreeMap<&'static str, Vec<&'static str>> {
    let languages = if languages.is_empty() {
        list_supported_languages()
    } else {
        languages
    };

    languages
        .iter()
        .map(|&language| {
            (
                language.code(),
                table.list_keys_missing_translation(language).collect(),
            )
        })
        .collect()
}

/// Coverage of every supported language, in picker order.
pub fn coverage_report(table: &TranslationTable) -> Vec<LanguageCoverage> {
    Language::ALL
        .into_iter()
        .map(|language| table.coverage(language))
        .collect()
}

/// Parse `name=value` command-line arguments into [`Params`].
pub fn parse_params<S: AsRef<str>>(args: &[S]) -> Result<Params> {
    let mut params = Params::new();
    for arg in args {
        let arg = arg.as_ref();
        let Some((name, value)) = arg.split_once('=') else {
            bail!("Invalid parameter '{}': expected name=value", arg);
        };
        if name.is_empty() {
            bail!("Invalid parameter '{}': empty name", arg);
        }
        params.insert(name, value);
    }
    Ok(params)
}
