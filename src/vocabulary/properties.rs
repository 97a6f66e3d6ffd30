//! Property groups shared between kinds.
//!
//! A concrete kind embeds one group per ancestor that declares attributes
//! (every kind embeds [`ThingProperties`], creative works add
//! [`CreativeWorkProperties`], and so on) plus any capability groups such as
//! [`PrintMetadata`] that cut across the ancestor chain. The `Has*` traits
//! give uniform access to a group regardless of the concrete kind.

use chrono::NaiveDate;

use crate::serializer::{FieldReader, FieldWriter};
use crate::Result;

use super::{Duration, Field, Iri, Kind, Node, Person, TypeValidator};

pub const ABOUT: TypeValidator = TypeValidator::new(Field::About, &[Kind::Thing]);
pub const AUTHOR: TypeValidator =
    TypeValidator::new(Field::Author, &[Kind::Organization, Kind::Person]);
pub const CREATOR: TypeValidator =
    TypeValidator::new(Field::Creator, &[Kind::Organization, Kind::Person]);
pub const PUBLISHER: TypeValidator =
    TypeValidator::new(Field::Publisher, &[Kind::Organization, Kind::Person]);
pub const MEMBER: TypeValidator =
    TypeValidator::new(Field::Member, &[Kind::Organization, Kind::Person]);

/// Attributes every kind carries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThingProperties {
    id: Option<Iri>,
    name: Option<String>,
    alternate_name: Option<String>,
    description: Option<String>,
    identifier: Option<String>,
    image: Option<Iri>,
    same_as: Option<Vec<Iri>>,
    url: Option<Iri>,
}

impl ThingProperties {
    accessors! {
        /// Node identifier, emitted as `@id`.
        value id: Iri, set_id, clear_id;
        text name, set_name, clear_name;
        text alternate_name, set_alternate_name, clear_alternate_name;
        text description, set_description, clear_description;
        text identifier, set_identifier, clear_identifier;
        value image: Iri, set_image, clear_image;
        /// Reference pages that unambiguously identify the item.
        list same_as: Iri, set_same_as, push_same_as, same_as_mut, clear_same_as;
        value url: Iri, set_url, clear_url;
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.scalar(Field::Id, self.id.as_ref());
        out.scalar(Field::Name, self.name.as_ref());
        out.scalar(Field::AlternateName, self.alternate_name.as_ref());
        out.scalar(Field::Description, self.description.as_ref());
        out.scalar(Field::Identifier, self.identifier.as_ref());
        out.scalar(Field::Image, self.image.as_ref());
        out.scalars(Field::SameAs, self.same_as.as_deref());
        out.scalar(Field::Url, self.url.as_ref());
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            id: input.scalar(Field::Id)?,
            name: input.scalar(Field::Name)?,
            alternate_name: input.scalar(Field::AlternateName)?,
            description: input.scalar(Field::Description)?,
            identifier: input.scalar(Field::Identifier)?,
            image: input.scalar(Field::Image)?,
            same_as: input.scalars(Field::SameAs)?,
            url: input.scalar(Field::Url)?,
        })
    }
}

/// Attributes of `CreativeWork` and everything below it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreativeWorkProperties {
    about: Option<Box<Node>>,
    author: Option<Box<Node>>,
    creator: Option<Box<Node>>,
    publisher: Option<Box<Node>>,
    date_created: Option<NaiveDate>,
    date_modified: Option<NaiveDate>,
    date_published: Option<NaiveDate>,
    genre: Option<String>,
    headline: Option<String>,
    alternative_headline: Option<String>,
    in_language: Option<String>,
    keywords: Option<String>,
    text: Option<String>,
    thumbnail_url: Option<Iri>,
    copyright_year: Option<i32>,
    position: Option<i32>,
}

impl CreativeWorkProperties {
    accessors! {
        /// The subject matter; any thing.
        node about: ABOUT, set_about, clear_about;
        /// Organization or Person.
        node author: AUTHOR, set_author, clear_author;
        /// Organization or Person.
        node creator: CREATOR, set_creator, clear_creator;
        /// Organization or Person.
        node publisher: PUBLISHER, set_publisher, clear_publisher;
        copy date_created: NaiveDate, set_date_created, clear_date_created;
        copy date_modified: NaiveDate, set_date_modified, clear_date_modified;
        copy date_published: NaiveDate, set_date_published, clear_date_published;
        text genre, set_genre, clear_genre;
        text headline, set_headline, clear_headline;
        text alternative_headline, set_alternative_headline, clear_alternative_headline;
        /// IETF BCP 47 language code.
        text in_language, set_in_language, clear_in_language;
        /// Comma separated keywords.
        text keywords, set_keywords, clear_keywords;
        text text, set_text, clear_text;
        value thumbnail_url: Iri, set_thumbnail_url, clear_thumbnail_url;
        copy copyright_year: i32, set_copyright_year, clear_copyright_year;
        copy position: i32, set_position, clear_position;
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.node(Field::About, self.about.as_deref());
        out.node(Field::Author, self.author.as_deref());
        out.node(Field::Creator, self.creator.as_deref());
        out.node(Field::Publisher, self.publisher.as_deref());
        out.scalar(Field::DateCreated, self.date_created.as_ref());
        out.scalar(Field::DateModified, self.date_modified.as_ref());
        out.scalar(Field::DatePublished, self.date_published.as_ref());
        out.scalar(Field::Genre, self.genre.as_ref());
        out.scalar(Field::Headline, self.headline.as_ref());
        out.scalar(Field::AlternativeHeadline, self.alternative_headline.as_ref());
        out.scalar(Field::InLanguage, self.in_language.as_ref());
        out.scalar(Field::Keywords, self.keywords.as_ref());
        out.scalar(Field::Text, self.text.as_ref());
        out.scalar(Field::ThumbnailUrl, self.thumbnail_url.as_ref());
        out.scalar(Field::CopyrightYear, self.copyright_year.as_ref());
        out.scalar(Field::Position, self.position.as_ref());
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            about: input.node(&ABOUT)?.map(Box::new),
            author: input.node(&AUTHOR)?.map(Box::new),
            creator: input.node(&CREATOR)?.map(Box::new),
            publisher: input.node(&PUBLISHER)?.map(Box::new),
            date_created: input.scalar(Field::DateCreated)?,
            date_modified: input.scalar(Field::DateModified)?,
            date_published: input.scalar(Field::DatePublished)?,
            genre: input.scalar(Field::Genre)?,
            headline: input.scalar(Field::Headline)?,
            alternative_headline: input.scalar(Field::AlternativeHeadline)?,
            in_language: input.scalar(Field::InLanguage)?,
            keywords: input.scalar(Field::Keywords)?,
            text: input.scalar(Field::Text)?,
            thumbnail_url: input.scalar(Field::ThumbnailUrl)?,
            copyright_year: input.scalar(Field::CopyrightYear)?,
            position: input.scalar(Field::Position)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleProperties {
    article_body: Option<String>,
    article_section: Option<String>,
    word_count: Option<i32>,
    page_start: Option<String>,
    page_end: Option<String>,
    pagination: Option<String>,
}

impl ArticleProperties {
    accessors! {
        text article_body, set_article_body, clear_article_body;
        text article_section, set_article_section, clear_article_section;
        copy word_count: i32, set_word_count, clear_word_count;
        text page_start, set_page_start, clear_page_start;
        text page_end, set_page_end, clear_page_end;
        /// Free-form page range such as `1-6, 9, 55`.
        text pagination, set_pagination, clear_pagination;
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.scalar(Field::ArticleBody, self.article_body.as_ref());
        out.scalar(Field::ArticleSection, self.article_section.as_ref());
        out.scalar(Field::WordCount, self.word_count.as_ref());
        out.scalar(Field::PageStart, self.page_start.as_ref());
        out.scalar(Field::PageEnd, self.page_end.as_ref());
        out.scalar(Field::Pagination, self.pagination.as_ref());
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            article_body: input.scalar(Field::ArticleBody)?,
            article_section: input.scalar(Field::ArticleSection)?,
            word_count: input.scalar(Field::WordCount)?,
            page_start: input.scalar(Field::PageStart)?,
            page_end: input.scalar(Field::PageEnd)?,
            pagination: input.scalar(Field::Pagination)?,
        })
    }
}

/// Print-edition capability of news articles.
///
/// Attached to kinds independently from their ancestor chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrintMetadata {
    dateline: Option<String>,
    print_column: Option<String>,
    print_edition: Option<String>,
    print_page: Option<String>,
    print_section: Option<String>,
}

impl PrintMetadata {
    accessors! {
        /// Location where the article was produced.
        text dateline, set_dateline, clear_dateline;
        /// Column number in the print edition.
        text print_column, set_print_column, clear_print_column;
        text print_edition, set_print_edition, clear_print_edition;
        /// Exact page name, e.g. `A5` or `B18`.
        text print_page, set_print_page, clear_print_page;
        text print_section, set_print_section, clear_print_section;
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.scalar(Field::Dateline, self.dateline.as_ref());
        out.scalar(Field::PrintColumn, self.print_column.as_ref());
        out.scalar(Field::PrintEdition, self.print_edition.as_ref());
        out.scalar(Field::PrintPage, self.print_page.as_ref());
        out.scalar(Field::PrintSection, self.print_section.as_ref());
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            dateline: input.scalar(Field::Dateline)?,
            print_column: input.scalar(Field::PrintColumn)?,
            print_edition: input.scalar(Field::PrintEdition)?,
            print_page: input.scalar(Field::PrintPage)?,
            print_section: input.scalar(Field::PrintSection)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaObjectProperties {
    content_url: Option<Iri>,
    embed_url: Option<Iri>,
    duration: Option<Duration>,
    encoding_format: Option<String>,
    upload_date: Option<NaiveDate>,
}

impl MediaObjectProperties {
    accessors! {
        value content_url: Iri, set_content_url, clear_content_url;
        value embed_url: Iri, set_embed_url, clear_embed_url;
        copy duration: Duration, set_duration, clear_duration;
        /// MIME type or encoding name.
        text encoding_format, set_encoding_format, clear_encoding_format;
        copy upload_date: NaiveDate, set_upload_date, clear_upload_date;
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.scalar(Field::ContentUrl, self.content_url.as_ref());
        out.scalar(Field::EmbedUrl, self.embed_url.as_ref());
        out.scalar(Field::Duration, self.duration.as_ref());
        out.scalar(Field::EncodingFormat, self.encoding_format.as_ref());
        out.scalar(Field::UploadDate, self.upload_date.as_ref());
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            content_url: input.scalar(Field::ContentUrl)?,
            embed_url: input.scalar(Field::EmbedUrl)?,
            duration: input.scalar(Field::Duration)?,
            encoding_format: input.scalar(Field::EncodingFormat)?,
            upload_date: input.scalar(Field::UploadDate)?,
        })
    }
}

/// Attributes of `Organization` and its descendants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrganizationProperties {
    legal_name: Option<String>,
    email: Option<String>,
    telephone: Option<String>,
    founding_date: Option<NaiveDate>,
    logo: Option<Iri>,
    founder: Option<Box<Person>>,
    member: Option<Vec<Node>>,
}

impl OrganizationProperties {
    accessors! {
        text legal_name, set_legal_name, clear_legal_name;
        text email, set_email, clear_email;
        text telephone, set_telephone, clear_telephone;
        copy founding_date: NaiveDate, set_founding_date, clear_founding_date;
        value logo: Iri, set_logo, clear_logo;
        entity founder: Person, set_founder, clear_founder;
        /// Members, each an Organization or a Person.
        nodes member: MEMBER, set_member, push_member, clear_member;
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter<'_>) {
        out.scalar(Field::LegalName, self.legal_name.as_ref());
        out.scalar(Field::Email, self.email.as_ref());
        out.scalar(Field::Telephone, self.telephone.as_ref());
        out.scalar(Field::FoundingDate, self.founding_date.as_ref());
        out.scalar(Field::Logo, self.logo.as_ref());
        out.entity(Field::Founder, self.founder.as_deref());
        out.nodes(Field::Member, self.member.as_deref());
    }

    pub(crate) fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            legal_name: input.scalar(Field::LegalName)?,
            email: input.scalar(Field::Email)?,
            telephone: input.scalar(Field::Telephone)?,
            founding_date: input.scalar(Field::FoundingDate)?,
            logo: input.scalar(Field::Logo)?,
            founder: input.entity(Field::Founder)?.map(Box::new),
            member: input.nodes(&MEMBER)?,
        })
    }
}

/// Access to the attributes every kind shares.
pub trait HasThing {
    fn thing(&self) -> &ThingProperties;
    fn thing_mut(&mut self) -> &mut ThingProperties;

    /// Shorthand for a fresh entity with only `name` set.
    fn named(name: impl Into<String>) -> Self
    where
        Self: Default + Sized,
    {
        let mut entity = Self::default();
        entity.thing_mut().set_name(name);
        entity
    }
}

pub trait HasCreativeWork: HasThing {
    fn creative_work(&self) -> &CreativeWorkProperties;
    fn creative_work_mut(&mut self) -> &mut CreativeWorkProperties;
}

pub trait HasArticle: HasCreativeWork {
    fn article(&self) -> &ArticleProperties;
    fn article_mut(&mut self) -> &mut ArticleProperties;
}

/// Kinds carrying the print-edition capability.
pub trait HasPrintMetadata: HasThing {
    fn print_metadata(&self) -> &PrintMetadata;
    fn print_metadata_mut(&mut self) -> &mut PrintMetadata;
}

pub trait HasMediaObject: HasCreativeWork {
    fn media_object(&self) -> &MediaObjectProperties;
    fn media_object_mut(&mut self) -> &mut MediaObjectProperties;
}

pub trait HasOrganization: HasThing {
    fn organization(&self) -> &OrganizationProperties;
    fn organization_mut(&mut self) -> &mut OrganizationProperties;
}
