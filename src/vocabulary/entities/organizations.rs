use crate::serializer::{FieldReader, FieldWriter};
use crate::vocabulary::properties::{OrganizationProperties, ThingProperties};
use crate::vocabulary::{Entity, Field, Kind};
use crate::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Organization {
    pub(super) thing: ThingProperties,
    pub(super) organization: OrganizationProperties,
}

impl Organization {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for Organization {
    const KIND: Kind = Kind::Organization;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.organization.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            organization: OrganizationProperties::read_fields(input)?,
        })
    }
}

/// A performance group, such as a band, an orchestra or a circus.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerformingGroup {
    pub(super) thing: ThingProperties,
    pub(super) organization: OrganizationProperties,
}

impl PerformingGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for PerformingGroup {
    const KIND: Kind = Kind::PerformingGroup;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.organization.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            organization: OrganizationProperties::read_fields(input)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MusicGroup {
    pub(super) thing: ThingProperties,
    pub(super) organization: OrganizationProperties,
    genre: Option<String>,
}

impl MusicGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    accessors! {
        /// Genre of the group's music.
        text genre, set_genre, clear_genre;
    }
}

impl Entity for MusicGroup {
    const KIND: Kind = Kind::MusicGroup;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.organization.write_fields(out);
        out.scalar(Field::Genre, self.genre.as_ref());
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            organization: OrganizationProperties::read_fields(input)?,
            genre: input.scalar(Field::Genre)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TheaterGroup {
    pub(super) thing: ThingProperties,
    pub(super) organization: OrganizationProperties,
}

impl TheaterGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for TheaterGroup {
    const KIND: Kind = Kind::TheaterGroup;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.organization.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            organization: OrganizationProperties::read_fields(input)?,
        })
    }
}
