use serde::{Deserialize, Serialize};

use crate::vocabulary::Iri;

/// Output options of the [`Serializer`](super::Serializer).
///
/// ```yaml
/// serializer:
///   emit_type: true
///   context: https://schema.org
///   pretty: false
/// ```
///
/// A `null` context disables the `@context` key altogether.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializerSettings {
    /// Emit `@type` on every object, nested ones included.
    pub emit_type: bool,
    /// `@context` written on the root object only.
    pub context: Option<Iri>,
    /// Indent the output of [`Serializer::to_string`](super::Serializer::to_string).
    pub pretty: bool,
}

impl Default for SerializerSettings {
    fn default() -> Self {
        Self {
            emit_type: true,
            context: Some(Iri::schema_org()),
            pretty: false,
        }
    }
}

impl SerializerSettings {
    /// Attributes only: no `@type`, no `@context`.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            emit_type: false,
            context: None,
            pretty: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, emit_type: bool) -> Self {
        self.emit_type = emit_type;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: Option<Iri>) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: SerializerSettings = serde_yaml::from_str("pretty: true").expect("yaml");
        assert!(settings.emit_type);
        assert!(settings.pretty);
        assert_eq!(settings.context, Some(Iri::schema_org()));
    }

    #[test]
    fn null_context_disables_it() {
        let settings: SerializerSettings =
            serde_yaml::from_str("context: ~\nemit_type: false").expect("yaml");
        assert_eq!(settings, SerializerSettings::bare());
    }

    #[test]
    fn invalid_context_is_rejected() {
        assert!(serde_yaml::from_str::<SerializerSettings>("context: not an iri").is_err());
    }
}
