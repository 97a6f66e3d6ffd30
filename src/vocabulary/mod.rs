//! Vocabulary domain: kinds, attributes and the entities built from them.
//!
//! The module stays free of any wire format. Entities only describe which
//! attributes they carry through the [`FieldWriter`](crate::serializer::FieldWriter)
//! and [`FieldReader`](crate::serializer::FieldReader) contracts; the
//! serializer decides how they are spelled.

#[macro_use]
mod accessors;

pub mod entities;
pub mod fields;
pub mod kind;
pub mod node;
pub mod properties;
pub mod validator;
pub mod value_objects;

pub use entities::{
    Article, CreativeWork, CreativeWorkSeason, CreativeWorkSeries, Episode, MediaObject,
    MusicGroup, NewsArticle, Organization, PerformingGroup, Person, ReportageNewsArticle,
    TheaterGroup, Thing, VideoObject,
};
pub use fields::{Field, CONTEXT_KEY, TYPE_KEY};
pub use kind::Kind;
pub use node::{Downcast, Entity, Node};
pub use properties::{
    ArticleProperties, CreativeWorkProperties, HasArticle, HasCreativeWork, HasMediaObject,
    HasOrganization, HasPrintMetadata, HasThing, MediaObjectProperties, OrganizationProperties,
    PrintMetadata, ThingProperties,
};
pub use validator::TypeValidator;
pub use value_objects::{Duration, DurationError, Iri, IriError, Scalar};
