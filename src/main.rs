//! Translation audit tool.
//!
//! Usage:
//!   i18n-audit languages                     # Supported languages as JSON
//!   i18n-audit missing [code...]             # Keys without a translation
//!   i18n-audit coverage                      # Per-language coverage as JSON
//!   i18n-audit validate                      # Placeholder consistency check
//!   i18n-audit export [path]                 # Delimited-text export
//!   i18n-audit translate <key> [name=value]  # Translate in PLUGIN_LANGUAGE
//!
//! Optional environment variables:
//! - PLUGIN_LANGUAGE (defaults to en-US)
//! - I18N_EXPORT_PATH (export destination when no path argument is given)

use anyhow::{bail, Context, Result};
use plugin_i18n::audit;
use plugin_i18n::config::Config;
use plugin_i18n::i18n::{Language, LanguageManager, LogNotifier, TranslationTable, TranslationValidator};
use std::path::Path;
use tracing::{info, warn};

const USAGE: &str = "Usage: i18n-audit <languages|missing|coverage|validate|export|translate> [args...]";

fn main() -> Result<()> {
    // Load .env file (ignored if absent)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("plugin_i18n=info".parse()?)
                .add_directive("i18n_audit=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let table = TranslationTable::global();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "languages" => {
            let manager = LanguageManager::from_config(&config, LogNotifier);
            println!("{}", serde_json::to_string_pretty(&manager.list_language_info())?);
        }
        "missing" => {
            let languages = rest
                .iter()
                .map(|code| Language::from_code(code).context("Invalid language argument"))
                .collect::<Result<Vec<_>>>()?;

            let missing = audit::missing_by_language(table, &languages);
            for (code, keys) in &missing {
                println!("{} ({} missing)", code, keys.len());
                for key in keys {
                    println!("  {}", key);
                }
            }
        }
        "coverage" => {
            println!("{}", serde_json::to_string_pretty(&audit::coverage_report(table))?);
        }
        "validate" => {
            let report = TranslationValidator::validate_table(table);
            println!("{}", serde_json::to_string_pretty(&report)?);

            if report.has_errors() {
                bail!("{} placeholder errors found", report.errors.len());
            }
            if report.has_warnings() {
                warn!("{} warnings", report.warnings.len());
            } else {
                info!("✓ {} keys validated, no issues", table.len());
            }
        }
        "export" => {
            let path = rest.first().cloned().or_else(|| config.export_path.clone());
            match path {
                Some(path) => audit::write_export(table, Path::new(&path))?,
                None => print!("{}", table.export_table_as_delimited_text()),
            }
        }
        "translate" => {
            let Some((key, params)) = rest.split_first() else {
                bail!("Usage: i18n-audit translate <key> [name=value...]");
            };
            let params = audit::parse_params(params)?;

            let manager = LanguageManager::from_config(&config, LogNotifier);
            println!("{}", manager.translate(key, Some(&params)));
        }
        other => bail!("Unknown command '{}'. {}", other, USAGE),
    }

    Ok(())
}
