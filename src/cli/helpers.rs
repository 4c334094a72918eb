//! Shared helper functions for CLI commands

use clap::ValueEnum;
use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Project};

/// Resolve the project: explicit --project path wins, else walk up from
/// the current directory.
pub fn resolve_project(global: &GlobalOpts) -> Result<Project> {
    match &global.project {
        Some(path) => Project::discover_from(path).map_err(|e| miette::miette!("{}", e)),
        None => Project::discover().map_err(|e| miette::miette!("{}", e)),
    }
}

/// Resolve the output format: an explicit --format wins, then the
/// configured `default_format` (config file or `EIQ_FORMAT`). An unknown
/// configured name is ignored rather than aborting.
pub fn resolve_format(cli_format: OutputFormat, config: &Config) -> OutputFormat {
    if cli_format != OutputFormat::Auto {
        return cli_format;
    }
    if let Some(ref name) = config.default_format {
        if let Ok(format) = OutputFormat::from_str(name, true) {
            return format;
        }
    }
    OutputFormat::Auto
}

/// Truncate a string to max_len characters, adding "..." if truncated.
/// Counts chars, not bytes, so multibyte input never splits mid-codepoint.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Format an optional value for table display
pub fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        // "Zürich Übergabestation" has multibyte chars before the cut point
        assert_eq!(truncate_str("Zürich Übergabestation", 10), "Zürich ...");
        assert_eq!(truncate_str("Zürich", 10), "Zürich");
        assert_eq!(truncate_str("電源変換装置テスト", 6), "電源変...");
    }

    #[test]
    fn test_resolve_format_explicit_flag_wins() {
        let config = Config {
            default_format: Some("json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(OutputFormat::Csv, &config),
            OutputFormat::Csv
        );
    }

    #[test]
    fn test_resolve_format_auto_uses_config() {
        let config = Config {
            default_format: Some("json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(OutputFormat::Auto, &config),
            OutputFormat::Json
        );
    }

    #[test]
    fn test_resolve_format_ignores_unknown_name() {
        let config = Config {
            default_format: Some("parquet".to_string()),
            ..Config::default()
        };
        assert_eq!(
            resolve_format(OutputFormat::Auto, &config),
            OutputFormat::Auto
        );
    }

    #[test]
    fn test_escape_csv() {
        assert_eq!(escape_csv("simple"), "simple");
        assert_eq!(escape_csv("with,comma"), "\"with,comma\"");
        assert_eq!(escape_csv("with\"quote"), "\"with\"\"quote\"");
    }

    #[test]
    fn test_display_opt() {
        assert_eq!(display_opt(&Some(42)), "42");
        assert_eq!(display_opt::<u32>(&None), "-");
    }
}
