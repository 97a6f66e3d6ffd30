use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::errors::Error;

const SCHEMA_PREFIXES: [&str; 3] = ["https://schema.org/", "http://schema.org/", "schema:"];

/// A node of the vocabulary's single-rooted inheritance tree.
///
/// The enumeration is closed: every concrete entity type in the crate has
/// exactly one variant here and a matching [`crate::vocabulary::Node`] variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
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
}

impl Kind {
    /// Every kind, parents listed before their children.
    pub const ALL: [Self; 15] = [
        Self::Thing,
        Self::CreativeWork,
        Self::Article,
        Self::NewsArticle,
        Self::ReportageNewsArticle,
        Self::Episode,
        Self::CreativeWorkSeason,
        Self::CreativeWorkSeries,
        Self::MediaObject,
        Self::VideoObject,
        Self::Person,
        Self::Organization,
        Self::PerformingGroup,
        Self::MusicGroup,
        Self::TheaterGroup,
    ];

    /// Returns the vocabulary name emitted as `@type`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thing => "Thing",
            Self::CreativeWork => "CreativeWork",
            Self::Article => "Article",
            Self::NewsArticle => "NewsArticle",
            Self::ReportageNewsArticle => "ReportageNewsArticle",
            Self::Episode => "Episode",
            Self::CreativeWorkSeason => "CreativeWorkSeason",
            Self::CreativeWorkSeries => "CreativeWorkSeries",
            Self::MediaObject => "MediaObject",
            Self::VideoObject => "VideoObject",
            Self::Person => "Person",
            Self::Organization => "Organization",
            Self::PerformingGroup => "PerformingGroup",
            Self::MusicGroup => "MusicGroup",
            Self::TheaterGroup => "TheaterGroup",
        }
    }

    /// Returns the direct parent, `None` only for [`Kind::Thing`].
    #[must_use]
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::Thing => None,
            Self::CreativeWork | Self::Person | Self::Organization => Some(Self::Thing),
            Self::Article
            | Self::Episode
            | Self::CreativeWorkSeason
            | Self::CreativeWorkSeries
            | Self::MediaObject => Some(Self::CreativeWork),
            Self::NewsArticle => Some(Self::Article),
            Self::ReportageNewsArticle => Some(Self::NewsArticle),
            Self::VideoObject => Some(Self::MediaObject),
            Self::PerformingGroup => Some(Self::Organization),
            Self::MusicGroup | Self::TheaterGroup => Some(Self::PerformingGroup),
        }
    }

    /// Walks the parent chain, nearest ancestor first.
    pub fn ancestors(self) -> impl Iterator<Item = Self> {
        std::iter::successors(self.parent(), |kind| kind.parent())
    }

    /// Returns every transitive descendant in [`Kind::ALL`] order.
    #[must_use]
    pub fn descendants(self) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|candidate| *candidate != self && candidate.is_a(self))
            .collect()
    }

    /// Returns `true` when `self` equals `other` or descends from it.
    #[must_use]
    pub fn is_a(self, other: Self) -> bool {
        self == other || self.ancestors().any(|ancestor| ancestor == other)
    }

    /// Resolves a `@type` value.
    ///
    /// Accepts the bare vocabulary name as well as the `schema:` compact form
    /// and full schema.org IRIs.
    pub fn from_name(name: &str) -> Option<Self> {
        let local = SCHEMA_PREFIXES
            .iter()
            .find_map(|prefix| name.strip_prefix(prefix))
            .unwrap_or(name);
        Self::ALL.into_iter().find(|kind| kind.name() == local)
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownKind(s.to_owned()))
    }
}
