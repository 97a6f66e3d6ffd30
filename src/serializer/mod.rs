//! JSON-LD encoding and decoding of vocabulary entities.
//!
//! Output keys come from the [`Field`](crate::vocabulary::Field) table, never
//! from Rust field names. Objects are emitted with sorted keys so that equal
//! entities always produce byte-identical documents.

mod reader;
mod settings;
mod writer;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use reader::FieldReader;
pub use settings::SerializerSettings;
pub use writer::FieldWriter;

use crate::errors::Error;
use crate::vocabulary::{Entity, Node, CONTEXT_KEY};
use crate::Result;

/// Converts entities to and from JSON-LD according to its settings.
#[derive(Clone, Debug, Default)]
pub struct Serializer {
    settings: SerializerSettings,
}

impl Serializer {
    #[must_use]
    pub fn new(settings: SerializerSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> &SerializerSettings {
        &self.settings
    }

    /// Encodes `node` as a root object.
    #[must_use]
    pub fn to_value(&self, node: &Node) -> Value {
        tracing::trace!(kind = %node.kind(), "serialize_node");
        self.with_context(writer::encode_node(&self.settings, node))
    }

    /// Same as [`Serializer::to_value`] for a concrete entity.
    #[must_use]
    pub fn entity_to_value<E: Entity>(&self, entity: &E) -> Value {
        tracing::trace!(kind = %E::KIND, "serialize_node");
        self.with_context(writer::encode_entity(&self.settings, entity))
    }

    /// Renders `node`, indented when the settings ask for it.
    ///
    /// # Errors
    ///
    /// Fails only if `serde_json` cannot write the document.
    pub fn to_string(&self, node: &Node) -> Result<String> {
        let value = self.to_value(node);
        let text = if self.settings.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Decodes a root object; its `@type` picks the entity kind.
    ///
    /// # Errors
    ///
    /// Returns an error when the root or a polymorphic slot lacks `@type`,
    /// names an unknown kind, holds a kind its attribute does not permit, or
    /// when a value has the wrong shape.
    pub fn from_value(&self, value: &Value) -> Result<Node> {
        let node = reader::decode_root(value)?;
        tracing::trace!(kind = %node.kind(), "deserialize_node");
        Ok(node)
    }

    /// Parses and decodes a JSON-LD document.
    ///
    /// # Errors
    ///
    /// See [`Serializer::from_value`]; invalid JSON is reported as [`Error::Json`].
    pub fn from_str(&self, text: &str) -> Result<Node> {
        let value: Value = serde_json::from_str(text)?;
        self.from_value(&value)
    }

    /// Decodes a root object that has to be of kind `E`.
    ///
    /// # Errors
    ///
    /// [`Error::KindMismatch`] when the document names another kind, plus
    /// everything [`Serializer::from_value`] reports.
    pub fn entity_from_value<E: Entity>(&self, value: &Value) -> Result<E> {
        self.from_value(value)?
            .downcast::<E>()
            .map_err(|node| Error::KindMismatch {
                expected: E::KIND,
                found: node.kind(),
            })
    }

    fn with_context(&self, value: Value) -> Value {
        match (value, &self.settings.context) {
            (Value::Object(mut map), Some(context)) => {
                map.insert(CONTEXT_KEY.to_owned(), Value::String(context.to_string()));
                Value::Object(map)
            }
            (value, _) => value,
        }
    }
}

/// Encodes `node` with the default settings.
#[must_use]
pub fn to_value(node: &Node) -> Value {
    Serializer::default().to_value(node)
}

/// Renders `node` with the default settings.
///
/// # Errors
///
/// See [`Serializer::to_string`].
pub fn to_string(node: &Node) -> Result<String> {
    Serializer::default().to_string(node)
}

/// # Errors
///
/// See [`Serializer::from_value`].
pub fn from_value(value: &Value) -> Result<Node> {
    Serializer::default().from_value(value)
}

/// # Errors
///
/// See [`Serializer::from_str`].
pub fn from_str(text: &str) -> Result<Node> {
    Serializer::default().from_str(text)
}

/// Writes the node as a root JSON-LD object with the default settings.
impl Serialize for Node {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_value(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        from_value(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use serde_json::json;

    use super::*;
    use crate::vocabulary::{Episode, HasThing, Iri, Kind, Person};

    fn pilot() -> Episode {
        let mut episode = Episode::named("Pilot");
        episode.set_episode_number(1).set_actor(Person::named("Jane"));
        episode
    }

    #[test]
    fn context_is_written_on_the_root_only() {
        let value = to_value(&pilot().into());
        assert_eq!(value["@context"], json!("https://schema.org"));
        assert_eq!(value["actor"].get("@context"), None);
    }

    #[test]
    fn compact_output_is_deterministic() {
        let node: Node = pilot().into();
        assert_snapshot!(
            to_string(&node).expect("json"),
            @r###"{"@context":"https://schema.org","@type":"Episode","actor":{"@type":"Person","name":"Jane"},"episodeNumber":1,"name":"Pilot"}"###
        );
    }

    #[test]
    fn pretty_output_follows_settings() {
        let serializer = Serializer::new(SerializerSettings::bare().with_pretty(true));
        assert_snapshot!(
            serializer.to_string(&Person::named("Jane").into()).expect("json"),
            @r###"
        {
          "name": "Jane"
        }
        "###
        );
    }

    #[test]
    fn custom_context_replaces_the_default() {
        let context = Iri::new("https://example.org/context").expect("iri");
        let serializer =
            Serializer::new(SerializerSettings::default().with_context(Some(context)));
        let value = serializer.entity_to_value(&Person::new());
        assert_eq!(
            value,
            json!({ "@context": "https://example.org/context", "@type": "Person" })
        );
    }

    #[test]
    fn typed_decoding_reports_kind_mismatch() {
        let serializer = Serializer::default();
        let err = serializer
            .entity_from_value::<Person>(&json!({ "@type": "Organization" }))
            .expect_err("organization root");
        assert!(matches!(
            err,
            Error::KindMismatch {
                expected: Kind::Person,
                found: Kind::Organization
            }
        ));
    }

    #[test]
    fn node_round_trips_through_serde() {
        let node: Node = pilot().into();
        let text = serde_json::to_string(&node).expect("serialize");
        let back: Node = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, node);
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(from_str("{"), Err(Error::Json(_))));
    }
}
