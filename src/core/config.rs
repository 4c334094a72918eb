//! Configuration management with layered hierarchy

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

use crate::core::Project;

/// Configuration with layered hierarchy: built-in defaults, then the
/// global user config, then the project config, then environment
/// variables. Later layers win.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default output format
    pub default_format: Option<String>,

    /// Fixed reference date for status/risk classification, YYYY-MM-DD.
    /// Unset means today.
    pub as_of: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. Global user config (~/.config/eiq/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&global_path) {
                    if let Ok(global) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(global);
                    }
                }
            }
        }

        // 3. Project config (.eiq/config.yaml)
        if let Ok(project) = Project::discover() {
            let project_config_path = project.eiq_dir().join("config.yaml");
            if project_config_path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&project_config_path) {
                    if let Ok(project_config) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(project_config);
                    }
                }
            }
        }

        // 4. Environment variables
        if let Ok(format) = std::env::var("EIQ_FORMAT") {
            config.default_format = Some(format);
        }
        if let Ok(as_of) = std::env::var("EIQ_AS_OF") {
            config.as_of = Some(as_of);
        }

        config
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "eiq")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
        if other.as_of.is_some() {
            self.as_of = other.as_of;
        }
    }

    /// Resolve the reference date: an explicit CLI value wins, then the
    /// configured one, then today. An unparseable configured date falls
    /// back to today rather than aborting.
    pub fn resolve_as_of(&self, cli_as_of: Option<NaiveDate>) -> NaiveDate {
        if let Some(date) = cli_as_of {
            return date;
        }
        if let Some(ref raw) = self.as_of {
            if let Ok(date) = raw.parse::<NaiveDate>() {
                return date;
            }
        }
        chrono::Local::now().date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_as_of_prefers_cli() {
        let config = Config {
            as_of: Some("2026-01-01".to_string()),
            ..Config::default()
        };
        let cli = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        assert_eq!(config.resolve_as_of(Some(cli)), cli);
    }

    #[test]
    fn test_resolve_as_of_uses_config_date() {
        let config = Config {
            as_of: Some("2026-01-01".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_as_of(None),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_resolve_as_of_ignores_garbage() {
        let config = Config {
            as_of: Some("not-a-date".to_string()),
            ..Config::default()
        };
        // Falls back to today; just check it does not panic
        let _ = config.resolve_as_of(None);
    }
}
