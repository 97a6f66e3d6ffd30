//! Tracing subscriber installation.
//!
//! The library itself only emits `tracing` events; applications that want to
//! see them call [`init`] once with the `logger` section of their
//! [`Config`](crate::config::Config).

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub enable: bool,
    pub level: LogLevel,
    pub format: Format,
    /// Full `EnvFilter` directive overriding `level`, e.g.
    /// `microdata_rs=trace,info`.
    pub override_filter: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: LogLevel::Info,
            format: Format::Compact,
            override_filter: None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl LoggerConfig {
    /// Filter directive in effect: `RUST_LOG` first, then the override,
    /// then the configured level.
    #[must_use]
    pub fn filter(&self) -> String {
        std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|directive| !directive.is_empty())
            .or_else(|| self.override_filter.clone())
            .unwrap_or_else(|| self.level.to_string())
    }
}

/// Installs a global subscriber built from `config`.
///
/// Does nothing when the logger is disabled.
///
/// # Errors
///
/// Fails when the filter directive does not parse or when a global
/// subscriber is already installed.
pub fn init(config: &LoggerConfig) -> Result<()> {
    if !config.enable {
        return Ok(());
    }

    let filter =
        EnvFilter::try_new(config.filter()).map_err(|err| Error::Logger(err.to_string()))?;
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        Format::Compact => subscriber_fmt::layer().compact().with_target(true).boxed(),
        Format::Pretty => subscriber_fmt::layer().pretty().boxed(),
        Format::Json => subscriber_fmt::layer()
            .json()
            .with_current_span(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|err| Error::Logger(err.to_string()))?;

    tracing::debug!(level = %config.level, format = ?config.format, "logger_initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("warn", LogLevel::Warn)]
    #[case("off", LogLevel::Off)]
    fn level_parses_lowercase(#[case] text: &str, #[case] expected: LogLevel) {
        let level: LogLevel = serde_yaml::from_str(text).expect("level");
        assert_eq!(level, expected);
        assert_eq!(level.to_string(), text);
    }

    #[test]
    fn partial_section_keeps_defaults() {
        let config: LoggerConfig = serde_yaml::from_str("format: json").expect("logger");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.level, LogLevel::Info);
        assert!(config.enable);
    }

    #[test]
    fn disabled_logger_installs_nothing() {
        let config = LoggerConfig {
            enable: false,
            ..LoggerConfig::default()
        };
        assert!(init(&config).is_ok());
    }

    #[test]
    fn invalid_override_is_reported() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }
        let config = LoggerConfig {
            override_filter: Some("microdata_rs=loud".to_owned()),
            ..LoggerConfig::default()
        };
        assert!(matches!(init(&config), Err(Error::Logger(_))));
    }
}
