use crate::serializer::{FieldReader, FieldWriter};
use crate::Result;

use super::entities::{
    Article, CreativeWork, CreativeWorkSeason, CreativeWorkSeries, Episode, MediaObject,
    MusicGroup, NewsArticle, Organization, PerformingGroup, Person, ReportageNewsArticle,
    TheaterGroup, Thing, VideoObject,
};
use super::{HasThing, Kind, ThingProperties};

/// A concrete vocabulary type.
pub trait Entity: Clone + Default + Into<Node> + Downcast {
    const KIND: Kind;

    /// Emits every present attribute, ancestors' groups included.
    fn write_fields(&self, out: &mut FieldWriter<'_>);

    /// Rebuilds the entity from an object already known to be of [`Self::KIND`].
    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self>;
}

/// Typed views into a [`Node`].
pub trait Downcast: Sized {
    fn downcast_ref(node: &Node) -> Option<&Self>;
    fn downcast_mut(node: &mut Node) -> Option<&mut Self>;
    fn downcast(node: Node) -> std::result::Result<Self, Node>;
}

macro_rules! nodes {
    ($($variant:ident),+ $(,)?) => {
        /// Any entity, tagged with its concrete kind.
        ///
        /// Polymorphic attributes store `Node`s; the tag is what their
        /// validators inspect.
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub enum Node {
            $($variant($variant),)+
        }

        impl Node {
            /// Runtime kind of the wrapped entity.
            #[must_use]
            pub fn kind(&self) -> Kind {
                match self {
                    $(Self::$variant(_) => Kind::$variant,)+
                }
            }

            /// Attributes shared by every kind.
            #[must_use]
            pub fn thing(&self) -> &ThingProperties {
                match self {
                    $(Self::$variant(entity) => entity.thing(),)+
                }
            }

            pub fn thing_mut(&mut self) -> &mut ThingProperties {
                match self {
                    $(Self::$variant(entity) => entity.thing_mut(),)+
                }
            }

            pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
                match self {
                    $(Self::$variant(entity) => entity.write_fields(out),)+
                }
            }

            pub(crate) fn read_fields(kind: Kind, input: &mut FieldReader<'_>) -> Result<Self> {
                match kind {
                    $(Kind::$variant => $variant::read_fields(input).map(Self::$variant),)+
                }
            }

            /// Creates an entity of `kind` with every attribute absent.
            #[must_use]
            pub fn empty(kind: Kind) -> Self {
                match kind {
                    $(Kind::$variant => Self::$variant($variant::default()),)+
                }
            }
        }

        $(
            impl From<$variant> for Node {
                fn from(entity: $variant) -> Self {
                    Self::$variant(entity)
                }
            }

            impl Downcast for $variant {
                fn downcast_ref(node: &Node) -> Option<&Self> {
                    match node {
                        Node::$variant(entity) => Some(entity),
                        _ => None,
                    }
                }

                fn downcast_mut(node: &mut Node) -> Option<&mut Self> {
                    match node {
                        Node::$variant(entity) => Some(entity),
                        _ => None,
                    }
                }

                fn downcast(node: Node) -> std::result::Result<Self, Node> {
                    match node {
                        Node::$variant(entity) => Ok(entity),
                        other => Err(other),
                    }
                }
            }
        )+
    };
}

nodes!(
    Thing,
    CreativeWork,
    Article,
    NewsArticle,
    ReportageNewsArticle,
    Episode,
    CreativeWorkSeason,
    CreativeWorkSeries,
    MediaObject,
    VideoObject,
    Person,
    Organization,
    PerformingGroup,
    MusicGroup,
    TheaterGroup,
);

impl Node {
    /// Returns `true` when the wrapped entity's kind is `kind` or descends from it.
    #[must_use]
    pub fn is_a(&self, kind: Kind) -> bool {
        self.kind().is_a(kind)
    }

    #[must_use]
    pub fn downcast_ref<E: Downcast>(&self) -> Option<&E> {
        E::downcast_ref(self)
    }

    pub fn downcast_mut<E: Downcast>(&mut self) -> Option<&mut E> {
        E::downcast_mut(self)
    }

    /// Unwraps the concrete entity, handing the node back on a kind mismatch.
    pub fn downcast<E: Downcast>(self) -> std::result::Result<E, Self> {
        E::downcast(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_matching_variant() {
        for kind in Kind::ALL {
            assert_eq!(Node::empty(kind).kind(), kind);
        }
    }

    #[test]
    fn downcasting_respects_the_tag() {
        let mut node: Node = Person::named("Jane").into();
        assert!(node.downcast_ref::<Organization>().is_none());
        assert_eq!(
            node.downcast_ref::<Person>().and_then(|p| p.thing().name()),
            Some("Jane")
        );

        if let Some(person) = node.downcast_mut::<Person>() {
            person.set_given_name("Jane");
        }
        let person = node.downcast::<Person>().expect("person node");
        assert_eq!(person.given_name(), Some("Jane"));
    }

    #[test]
    fn failed_downcast_returns_the_node() {
        let node: Node = MusicGroup::named("The Band").into();
        let node = node.downcast::<Person>().expect_err("not a person");
        assert_eq!(node.kind(), Kind::MusicGroup);
        assert!(node.is_a(Kind::Organization));
        assert_eq!(node.thing().name(), Some("The Band"));
    }
}
