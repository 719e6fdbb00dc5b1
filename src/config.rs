//! Report configuration
//!
//! Read from environment variables:
//! - `ETS_REPORT_FORMAT`: `markdown` (default), `html` or `json`
//! - `ETS_LOG`: tracing filter directive (`RUST_LOG` wins when set)

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const FORMAT_VAR: &str = "ETS_REPORT_FORMAT";
pub const LOG_VAR: &str = "ETS_LOG";

/// Log filter used when neither `RUST_LOG` nor `ETS_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "ets_infoplus=info,warn";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid report format '{0}' (expected markdown, html or json)")]
    InvalidFormat(String),
}

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Html,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub log_filter: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ReportConfig {
    /// Configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Configuration from an arbitrary variable source.
    /// Empty values count as unset.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let format = match get(FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => ReportFormat::default(),
        };

        let log_filter = get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { format, log_filter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ReportConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.format, ReportFormat::Markdown);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_format_from_env() {
        let config = ReportConfig::from_vars(vars(&[(FORMAT_VAR, "HTML")])).unwrap();
        assert_eq!(config.format, ReportFormat::Html);

        let config = ReportConfig::from_vars(vars(&[(FORMAT_VAR, " json ")])).unwrap();
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = ReportConfig::from_vars(vars(&[(FORMAT_VAR, ""), (LOG_VAR, "  ")])).unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_invalid_format_is_error() {
        let err = ReportConfig::from_vars(vars(&[(FORMAT_VAR, "pdf")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFormat("pdf".to_string()));
    }

    #[test]
    fn test_log_filter_override() {
        let config = ReportConfig::from_vars(vars(&[(LOG_VAR, "ets_infoplus=debug")])).unwrap();
        assert_eq!(config.log_filter, "ets_infoplus=debug");
    }

    #[test]
    fn test_format_display_round_trip() {
        for format in [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Json] {
            assert_eq!(format.to_string().parse::<ReportFormat>().unwrap(), format);
        }
    }
}
