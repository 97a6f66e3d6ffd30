use serde_json::{Map, Value};

use super::SerializerSettings;
use crate::vocabulary::{Entity, Field, Kind, Node, Scalar, TYPE_KEY};

/// Collects the present attributes of one object.
///
/// Absent attributes are skipped; present lists are written even when empty.
pub struct FieldWriter<'a> {
    settings: &'a SerializerSettings,
    map: Map<String, Value>,
}

impl<'a> FieldWriter<'a> {
    pub(crate) fn new(settings: &'a SerializerSettings, kind: Kind) -> Self {
        let mut map = Map::new();
        if settings.emit_type {
            map.insert(TYPE_KEY.to_owned(), Value::String(kind.name().to_owned()));
        }
        Self { settings, map }
    }

    pub(crate) fn into_map(self) -> Map<String, Value> {
        self.map
    }

    pub fn scalar<T: Scalar>(&mut self, field: Field, value: Option<&T>) {
        if let Some(value) = value {
            self.insert(field, value.to_json());
        }
    }

    pub fn scalars<T: Scalar>(&mut self, field: Field, values: Option<&[T]>) {
        if let Some(values) = values {
            self.insert(field, values.iter().map(Scalar::to_json).collect());
        }
    }

    pub fn entity<E: Entity>(&mut self, field: Field, value: Option<&E>) {
        if let Some(value) = value {
            let encoded = encode_entity(self.settings, value);
            self.insert(field, encoded);
        }
    }

    pub fn entities<E: Entity>(&mut self, field: Field, values: Option<&[E]>) {
        if let Some(values) = values {
            let encoded = values
                .iter()
                .map(|value| encode_entity(self.settings, value))
                .collect();
            self.insert(field, encoded);
        }
    }

    pub fn node(&mut self, field: Field, value: Option<&Node>) {
        if let Some(value) = value {
            let encoded = encode_node(self.settings, value);
            self.insert(field, encoded);
        }
    }

    pub fn nodes(&mut self, field: Field, values: Option<&[Node]>) {
        if let Some(values) = values {
            let encoded = values
                .iter()
                .map(|value| encode_node(self.settings, value))
                .collect();
            self.insert(field, encoded);
        }
    }

    fn insert(&mut self, field: Field, value: Value) {
        self.map.insert(field.external_name().to_owned(), value);
    }
}

pub(crate) fn encode_entity<E: Entity>(settings: &SerializerSettings, entity: &E) -> Value {
    let mut out = FieldWriter::new(settings, E::KIND);
    entity.write_fields(&mut out);
    Value::Object(out.into_map())
}

pub(crate) fn encode_node(settings: &SerializerSettings, node: &Node) -> Value {
    let mut out = FieldWriter::new(settings, node.kind());
    node.write_fields(&mut out);
    Value::Object(out.into_map())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::vocabulary::{HasThing, Person};

    #[test]
    fn absent_attributes_are_omitted() {
        let settings = SerializerSettings::bare();
        let mut out = FieldWriter::new(&settings, Kind::Thing);
        out.scalar::<String>(Field::Name, None);
        out.scalars::<String>(Field::SameAs, None);
        out.node(Field::About, None);
        assert!(out.into_map().is_empty());
    }

    #[test]
    fn present_empty_list_is_written() {
        let settings = SerializerSettings::bare();
        let mut out = FieldWriter::new(&settings, Kind::Organization);
        out.nodes(Field::Member, Some(&[][..]));
        assert_eq!(Value::Object(out.into_map()), json!({ "member": [] }));
    }

    #[test]
    fn nested_objects_carry_their_own_type() {
        let settings = SerializerSettings::default();
        let mut out = FieldWriter::new(&settings, Kind::Episode);
        out.entity(Field::Actor, Some(&Person::named("Jane")));
        assert_eq!(
            Value::Object(out.into_map()),
            json!({
                "@type": "Episode",
                "actor": { "@type": "Person", "name": "Jane" },
            })
        );
    }
}
