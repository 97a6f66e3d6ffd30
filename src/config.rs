//! Configuration loading.
//!
//! A configuration file is a YAML document rendered through `tera` first, so
//! values can come from the environment:
//!
//! ```yaml
//! logger:
//!   level: {{ get_env(name="LOG_LEVEL", default="info") }}
//!   format: compact
//! serializer:
//!   emit_type: true
//!   context: https://schema.org
//! ```
//!
//! Every section and key is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::logger::LoggerConfig;
use crate::serializer::{Serializer, SerializerSettings};
use crate::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logger: LoggerConfig,
    pub serializer: SerializerSettings,
}

impl Config {
    /// Renders `content` as a template and parses the result.
    ///
    /// # Errors
    ///
    /// Template errors and YAML errors are returned as-is.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let rendered = tera::Tera::one_off(content, &tera::Context::new(), false)?;
        if rendered.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&rendered)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be read, otherwise see
    /// [`Config::from_yaml`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading_config");
        Self::from_yaml(&content)
    }

    /// Serializer configured from the `serializer` section.
    #[must_use]
    pub fn serializer(&self) -> Serializer {
        Serializer::new(self.serializer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{Format, LogLevel};

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_yaml("").expect("config"), Config::default());
    }

    #[test]
    fn sections_override_defaults() {
        let config = Config::from_yaml(
            "logger:\n  level: debug\n  format: json\nserializer:\n  emit_type: false\n",
        )
        .expect("config");
        assert_eq!(config.logger.level, LogLevel::Debug);
        assert_eq!(config.logger.format, Format::Json);
        assert!(!config.serializer.emit_type);
        assert!(config.serializer.context.is_some());
    }

    #[test]
    fn template_defaults_apply() {
        let config = Config::from_yaml(
            "logger:\n  level: {{ get_env(name=\"MICRODATA_RS_UNSET_LEVEL\", default=\"warn\") }}\n",
        )
        .expect("config");
        assert_eq!(config.logger.level, LogLevel::Warn);
    }

    #[test]
    fn broken_template_is_a_template_error() {
        assert!(matches!(
            Config::from_yaml("logger: {{ nope("),
            Err(Error::Template(_))
        ));
    }

    #[test]
    fn unknown_level_is_a_yaml_error() {
        assert!(matches!(
            Config::from_yaml("logger:\n  level: loud\n"),
            Err(Error::Yaml(_))
        ));
    }
}
