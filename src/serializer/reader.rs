use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::errors::{Error, TypeConstraintViolation};
use crate::vocabulary::{Entity, Field, Kind, Node, Scalar, TypeValidator, TYPE_KEY};
use crate::Result;

/// Path reported for the root object.
pub(crate) const ROOT: &str = "$";

/// Pulls attributes out of one JSON-LD object.
///
/// `null` is read as absent. A single value where a list is expected becomes
/// a one-element list. Keys no attribute asked for are logged and dropped
/// once the object is finished.
pub struct FieldReader<'a> {
    path: String,
    object: &'a Map<String, Value>,
    consumed: BTreeSet<&'static str>,
}

impl<'a> FieldReader<'a> {
    fn new(path: String, object: &'a Map<String, Value>) -> Self {
        Self {
            path,
            object,
            consumed: BTreeSet::from([TYPE_KEY]),
        }
    }

    pub fn scalar<T: Scalar>(&mut self, field: Field) -> Result<Option<T>> {
        let Some(value) = self.take(field) else {
            return Ok(None);
        };
        let path = self.child(field);
        decode_scalar(&path, value).map(Some)
    }

    pub fn scalars<T: Scalar>(&mut self, field: Field) -> Result<Option<Vec<T>>> {
        let Some(value) = self.take(field) else {
            return Ok(None);
        };
        let path = self.child(field);
        each(&path, value, |path, item| decode_scalar(path, item)).map(Some)
    }

    /// Reads a statically typed reference. `@type` may be omitted; when
    /// present it has to name exactly `E`.
    pub fn entity<E: Entity>(&mut self, field: Field) -> Result<Option<E>> {
        let Some(value) = self.take(field) else {
            return Ok(None);
        };
        let path = self.child(field);
        decode_entity(field, &path, value).map(Some)
    }

    pub fn entities<E: Entity>(&mut self, field: Field) -> Result<Option<Vec<E>>> {
        let Some(value) = self.take(field) else {
            return Ok(None);
        };
        let path = self.child(field);
        each(&path, value, |path, item| decode_entity(field, path, item)).map(Some)
    }

    /// Reads a polymorphic reference guarded by `validator`. `@type` is
    /// mandatory and checked before the nested object is decoded.
    pub fn node(&mut self, validator: &TypeValidator) -> Result<Option<Node>> {
        let field = validator.attribute();
        let Some(value) = self.take(field) else {
            return Ok(None);
        };
        let path = self.child(field);
        decode_node(validator, &path, value).map(Some)
    }

    pub fn nodes(&mut self, validator: &TypeValidator) -> Result<Option<Vec<Node>>> {
        let field = validator.attribute();
        let Some(value) = self.take(field) else {
            return Ok(None);
        };
        let path = self.child(field);
        each(&path, value, |path, item| decode_node(validator, path, item)).map(Some)
    }

    fn take(&mut self, field: Field) -> Option<&'a Value> {
        let name = field.external_name();
        self.consumed.insert(name);
        self.object.get(name).filter(|value| !value.is_null())
    }

    fn child(&self, field: Field) -> String {
        format!("{}.{}", self.path, field)
    }

    fn finish(self) {
        for key in self.object.keys() {
            if key.starts_with('@') || self.consumed.contains(key.as_str()) {
                continue;
            }
            tracing::debug!(path = %self.path, field = %key, "ignored_field");
        }
    }
}

/// Decodes a root object, which must name its kind.
pub(crate) fn decode_root(value: &Value) -> Result<Node> {
    let object = as_object(ROOT, value)?;
    let kind = required_kind(ROOT, object)?;
    read_node(kind, ROOT.to_owned(), object)
}

fn decode_scalar<T: Scalar>(path: &str, value: &Value) -> Result<T> {
    T::from_json(value).ok_or_else(|| Error::invalid_value(path, T::EXPECTED))
}

fn decode_entity<E: Entity>(field: Field, path: &str, value: &Value) -> Result<E> {
    let object = as_object(path, value)?;
    if let Some(kind) = declared_kind(path, object)? {
        if kind != E::KIND {
            tracing::debug!(attribute = %field, offered = %kind, "type_constraint_violation");
            return Err(TypeConstraintViolation {
                attribute: field,
                offered: kind,
                permitted: vec![E::KIND],
            }
            .into());
        }
    }
    let mut input = FieldReader::new(path.to_owned(), object);
    let entity = E::read_fields(&mut input)?;
    input.finish();
    Ok(entity)
}

fn decode_node(validator: &TypeValidator, path: &str, value: &Value) -> Result<Node> {
    let object = as_object(path, value)?;
    let kind = required_kind(path, object)?;
    validator.validate_kind(kind)?;
    read_node(kind, path.to_owned(), object)
}

fn read_node(kind: Kind, path: String, object: &Map<String, Value>) -> Result<Node> {
    let mut input = FieldReader::new(path, object);
    let node = Node::read_fields(kind, &mut input)?;
    input.finish();
    Ok(node)
}

fn each<T>(
    path: &str,
    value: &Value,
    mut decode: impl FnMut(&str, &Value) -> Result<T>,
) -> Result<Vec<T>> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| decode(&format!("{path}[{index}]"), item))
            .collect(),
        single => decode(path, single).map(|item| vec![item]),
    }
}

fn as_object<'v>(path: &str, value: &'v Value) -> Result<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_value(path, "an object"))
}

fn declared_kind(path: &str, object: &Map<String, Value>) -> Result<Option<Kind>> {
    match object.get(TYPE_KEY) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(name)) => name.parse::<Kind>().map(Some),
        Some(_) => Err(Error::invalid_value(
            format!("{path}.{TYPE_KEY}"),
            "a kind name",
        )),
    }
}

fn required_kind(path: &str, object: &Map<String, Value>) -> Result<Kind> {
    declared_kind(path, object)?.ok_or_else(|| Error::MissingType {
        field: path.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::vocabulary::{Episode, HasThing, Person};

    #[test]
    fn root_requires_a_type() {
        let err = decode_root(&json!({ "name": "Jane" })).expect_err("no @type");
        assert!(matches!(err, Error::MissingType { field } if field == "$"));
    }

    #[test]
    fn root_rejects_unknown_kinds() {
        let err = decode_root(&json!({ "@type": "Spaceship" })).expect_err("unknown kind");
        assert!(matches!(err, Error::UnknownKind(name) if name == "Spaceship"));
    }

    #[test]
    fn polymorphic_slot_requires_a_type() {
        let err = decode_root(&json!({
            "@type": "Episode",
            "musicBy": { "name": "Jane" },
        }))
        .expect_err("untyped musicBy");
        assert!(matches!(err, Error::MissingType { field } if field == "$.musicBy"));
    }

    #[test]
    fn polymorphic_slot_enforces_its_validator() {
        let err = decode_root(&json!({
            "@type": "Episode",
            "musicBy": { "@type": "Organization", "name": "Studio" },
        }))
        .expect_err("organization composer");
        assert!(matches!(
            err,
            Error::TypeConstraint(TypeConstraintViolation {
                attribute: Field::MusicBy,
                offered: Kind::Organization,
                ..
            })
        ));
    }

    #[test]
    fn typed_slot_accepts_missing_type_and_rejects_others() {
        let node = decode_root(&json!({
            "@type": "Episode",
            "actor": { "name": "Jane" },
        }))
        .expect("untyped actor");
        let episode = node.downcast::<Episode>().expect("episode");
        assert_eq!(episode.actor().and_then(|p| p.thing().name()), Some("Jane"));

        let err = decode_root(&json!({
            "@type": "Episode",
            "actor": { "@type": "Organization" },
        }))
        .expect_err("organization actor");
        assert!(matches!(
            err,
            Error::TypeConstraint(TypeConstraintViolation { permitted, .. })
                if permitted == vec![Kind::Person]
        ));
    }

    #[test]
    fn null_reads_as_absent_and_single_value_as_list() {
        let node = decode_root(&json!({
            "@type": "Episode",
            "name": null,
            "actors": { "name": "Jane" },
        }))
        .expect("episode");
        let episode = node.downcast::<Episode>().expect("episode");
        assert_eq!(episode.thing().name(), None);
        assert_eq!(episode.actors().map(<[Person]>::len), Some(1));
    }

    #[test]
    fn wrong_shape_names_the_path() {
        let err = decode_root(&json!({
            "@type": "Episode",
            "episodeNumber": "five",
        }))
        .expect_err("text episode number");
        assert!(matches!(
            err,
            Error::InvalidValue { field, expected: "an integer" } if field == "$.episodeNumber"
        ));
    }

    #[test]
    fn list_errors_point_at_the_element() {
        let err = decode_root(&json!({
            "@type": "Organization",
            "member": [{ "@type": "Person" }, { "@type": "Episode" }],
        }))
        .expect_err("episode member");
        assert!(matches!(err, Error::TypeConstraint(_)));

        let err = decode_root(&json!({
            "@type": "Organization",
            "member": [{ "@type": "Person" }, "Jane"],
        }))
        .expect_err("text member");
        assert!(matches!(err, Error::InvalidValue { field, .. } if field == "$.member[1]"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let node = decode_root(&json!({
            "@type": "Person",
            "@context": "https://schema.org",
            "name": "Jane",
            "nickname": "JJ",
        }))
        .expect("person");
        assert_eq!(node.thing().name(), Some("Jane"));
    }
}
