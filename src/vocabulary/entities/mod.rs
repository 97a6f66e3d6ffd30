//! The vocabulary catalog.
//!
//! Each concrete kind is a struct composed of the property groups of its
//! ancestors, its capability groups and its own attributes. Inherited
//! attributes are reached through the `Has*` traits, declared ones through
//! inherent accessors.

mod creative_works;
mod organizations;
mod person;

pub use creative_works::{
    Article, CreativeWork, CreativeWorkSeason, CreativeWorkSeries, Episode, MediaObject,
    NewsArticle, ReportageNewsArticle, VideoObject, MUSIC_BY, PRODUCTION_COMPANY,
};
pub use organizations::{MusicGroup, Organization, PerformingGroup, TheaterGroup};
pub use person::{Person, AFFILIATION, WORKS_FOR};

use crate::serializer::{FieldReader, FieldWriter};
use crate::Result;

use super::properties::{
    ArticleProperties, CreativeWorkProperties, HasArticle, HasCreativeWork, HasMediaObject,
    HasOrganization, HasPrintMetadata, HasThing, MediaObjectProperties, OrganizationProperties,
    PrintMetadata, ThingProperties,
};
use super::{Entity, Kind};

/// The root kind. Rarely used directly; mostly useful as a generic reference.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Thing {
    thing: ThingProperties,
}

impl Thing {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for Thing {
    const KIND: Kind = Kind::Thing;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
        })
    }
}

property_group!(
    HasThing, ThingProperties, thing, thing_mut:
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

property_group!(
    HasCreativeWork, CreativeWorkProperties, creative_work, creative_work_mut:
    CreativeWork,
    Article,
    NewsArticle,
    ReportageNewsArticle,
    Episode,
    CreativeWorkSeason,
    CreativeWorkSeries,
    MediaObject,
    VideoObject,
);

property_group!(
    HasArticle, ArticleProperties, article, article_mut:
    Article,
    NewsArticle,
    ReportageNewsArticle,
);

property_group!(
    HasPrintMetadata, PrintMetadata, print_metadata, print_metadata_mut:
    NewsArticle,
    ReportageNewsArticle,
);

property_group!(
    HasMediaObject, MediaObjectProperties, media_object, media_object_mut:
    MediaObject,
    VideoObject,
);

property_group!(
    HasOrganization, OrganizationProperties, organization, organization_mut:
    Organization,
    PerformingGroup,
    MusicGroup,
    TheaterGroup,
);
