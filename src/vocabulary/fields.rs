//! Central attribute table.
//!
//! Every attribute of every kind is identified by a [`Field`]; the table below
//! is the only place that knows how a field is spelled in JSON-LD output.
//! Attributes that share a meaning across kinds (`duration`, `startDate`,
//! `productionCompany`, ...) share a single field.

use std::fmt::{self, Display, Formatter};

/// JSON-LD keyword carrying the kind discriminator.
pub const TYPE_KEY: &str = "@type";
/// JSON-LD keyword carrying the vocabulary context.
pub const CONTEXT_KEY: &str = "@context";

macro_rules! fields {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)+) => {
        /// Attribute identity, independent from its in-memory name.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $($(#[$meta])* $variant,)+
        }

        impl Field {
            /// Every declared field in table order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Key used for this attribute in serialized output.
            #[must_use]
            pub const fn external_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

fields! {
    /// `@id` of any thing.
    Id => "@id",
    Name => "name",
    AlternateName => "alternateName",
    Description => "description",
    Identifier => "identifier",
    Image => "image",
    SameAs => "sameAs",
    Url => "url",

    About => "about",
    Author => "author",
    Creator => "creator",
    Publisher => "publisher",
    DateCreated => "dateCreated",
    DateModified => "dateModified",
    DatePublished => "datePublished",
    Genre => "genre",
    Headline => "headline",
    AlternativeHeadline => "alternativeHeadline",
    InLanguage => "inLanguage",
    Keywords => "keywords",
    Text => "text",
    ThumbnailUrl => "thumbnailUrl",
    CopyrightYear => "copyrightYear",
    Position => "position",

    ArticleBody => "articleBody",
    ArticleSection => "articleSection",
    WordCount => "wordCount",
    PageStart => "pageStart",
    PageEnd => "pageEnd",
    Pagination => "pagination",

    Dateline => "dateline",
    PrintColumn => "printColumn",
    PrintEdition => "printEdition",
    PrintPage => "printPage",
    PrintSection => "printSection",

    Actor => "actor",
    Actors => "actors",
    Director => "director",
    Directors => "directors",
    Duration => "duration",
    EpisodeNumber => "episodeNumber",
    MusicBy => "musicBy",
    PartOfSeason => "partOfSeason",
    PartOfSeries => "partOfSeries",
    ProductionCompany => "productionCompany",
    Trailer => "trailer",
    IsAccessibleForFree => "isAccessibleForFree",

    SeasonNumber => "seasonNumber",
    NumberOfEpisodes => "numberOfEpisodes",
    StartDate => "startDate",
    EndDate => "endDate",
    Episodes => "episodes",
    Issn => "issn",

    ContentUrl => "contentUrl",
    EmbedUrl => "embedUrl",
    EncodingFormat => "encodingFormat",
    UploadDate => "uploadDate",
    Caption => "caption",
    VideoFrameSize => "videoFrameSize",
    VideoQuality => "videoQuality",

    GivenName => "givenName",
    FamilyName => "familyName",
    AdditionalName => "additionalName",
    Email => "email",
    Telephone => "telephone",
    JobTitle => "jobTitle",
    BirthDate => "birthDate",
    Affiliation => "affiliation",
    WorksFor => "worksFor",

    LegalName => "legalName",
    FoundingDate => "foundingDate",
    Logo => "logo",
    Founder => "founder",
    Member => "member",
}

impl Field {
    /// Looks a field up by its serialized key.
    #[must_use]
    pub fn from_external_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.external_name() == name)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.external_name())
    }
}
