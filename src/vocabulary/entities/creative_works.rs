use chrono::NaiveDate;

use crate::serializer::{FieldReader, FieldWriter};
use crate::vocabulary::properties::{
    ArticleProperties, CreativeWorkProperties, MediaObjectProperties, PrintMetadata,
    ThingProperties,
};
use crate::vocabulary::{Duration, Entity, Field, Kind, Node, TypeValidator};
use crate::Result;

use super::Person;

/// `musicBy` takes a MusicGroup or a Person, nothing else.
pub const MUSIC_BY: TypeValidator =
    TypeValidator::new(Field::MusicBy, &[Kind::MusicGroup, Kind::Person]);
pub const PRODUCTION_COMPANY: TypeValidator =
    TypeValidator::new(Field::ProductionCompany, &[Kind::Organization]);

/// Generic creative work: books, movies, recordings, software, ...
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreativeWork {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
}

impl CreativeWork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for CreativeWork {
    const KIND: Kind = Kind::CreativeWork;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Article {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    pub(super) article: ArticleProperties,
}

impl Article {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for Article {
    const KIND: Kind = Kind::Article;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        self.article.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            article: ArticleProperties::read_fields(input)?,
        })
    }
}

/// A news report; carries the print-edition capability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewsArticle {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    pub(super) article: ArticleProperties,
    pub(super) print_metadata: PrintMetadata,
}

impl NewsArticle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for NewsArticle {
    const KIND: Kind = Kind::NewsArticle;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        self.article.write_fields(out);
        self.print_metadata.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            article: ArticleProperties::read_fields(input)?,
            print_metadata: PrintMetadata::read_fields(input)?,
        })
    }
}

/// First-hand reporting of events, a kind of news article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportageNewsArticle {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    pub(super) article: ArticleProperties,
    pub(super) print_metadata: PrintMetadata,
}

impl ReportageNewsArticle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for ReportageNewsArticle {
    const KIND: Kind = Kind::ReportageNewsArticle;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        self.article.write_fields(out);
        self.print_metadata.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            article: ArticleProperties::read_fields(input)?,
            print_metadata: PrintMetadata::read_fields(input)?,
        })
    }
}

/// A media episode (TV, radio, video game) that can be part of a series or
/// season.
///
/// `actor`/`actors` and `director`/`directors` are independent attributes:
/// setting one never touches the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Episode {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    actor: Option<Box<Person>>,
    actors: Option<Vec<Person>>,
    director: Option<Box<Person>>,
    directors: Option<Vec<Person>>,
    duration: Option<Duration>,
    episode_number: Option<i32>,
    music_by: Option<Box<Node>>,
    part_of_season: Option<Box<CreativeWorkSeason>>,
    part_of_series: Option<Box<CreativeWorkSeries>>,
    production_company: Option<Box<Node>>,
    trailer: Option<Box<VideoObject>>,
    is_accessible_for_free: Option<bool>,
}

impl Episode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    accessors! {
        /// Actor in the episode. Supersedes `actors`.
        entity actor: Person, set_actor, clear_actor;
        list actors: Person, set_actors, push_actor, actors_mut, clear_actors;
        /// Director of the episode. Supersedes `directors`.
        entity director: Person, set_director, clear_director;
        list directors: Person, set_directors, push_director, directors_mut, clear_directors;
        copy duration: Duration, set_duration, clear_duration;
        /// Position of the episode within its season or series.
        copy episode_number: i32, set_episode_number, clear_episode_number;
        /// Composer of the soundtrack: a MusicGroup or a Person.
        node music_by: MUSIC_BY, set_music_by, clear_music_by;
        entity part_of_season: CreativeWorkSeason, set_part_of_season, clear_part_of_season;
        entity part_of_series: CreativeWorkSeries, set_part_of_series, clear_part_of_series;
        /// Production company or studio; any Organization.
        node production_company: PRODUCTION_COMPANY, set_production_company, clear_production_company;
        entity trailer: VideoObject, set_trailer, clear_trailer;
        copy is_accessible_for_free: bool, set_is_accessible_for_free, clear_is_accessible_for_free;
    }
}

impl Entity for Episode {
    const KIND: Kind = Kind::Episode;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        out.entity(Field::Actor, self.actor.as_deref());
        out.entities(Field::Actors, self.actors.as_deref());
        out.entity(Field::Director, self.director.as_deref());
        out.entities(Field::Directors, self.directors.as_deref());
        out.scalar(Field::Duration, self.duration.as_ref());
        out.scalar(Field::EpisodeNumber, self.episode_number.as_ref());
        out.node(Field::MusicBy, self.music_by.as_deref());
        out.entity(Field::PartOfSeason, self.part_of_season.as_deref());
        out.entity(Field::PartOfSeries, self.part_of_series.as_deref());
        out.node(Field::ProductionCompany, self.production_company.as_deref());
        out.entity(Field::Trailer, self.trailer.as_deref());
        out.scalar(Field::IsAccessibleForFree, self.is_accessible_for_free.as_ref());
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            actor: input.entity(Field::Actor)?.map(Box::new),
            actors: input.entities(Field::Actors)?,
            director: input.entity(Field::Director)?.map(Box::new),
            directors: input.entities(Field::Directors)?,
            duration: input.scalar(Field::Duration)?,
            episode_number: input.scalar(Field::EpisodeNumber)?,
            music_by: input.node(&MUSIC_BY)?.map(Box::new),
            part_of_season: input.entity(Field::PartOfSeason)?.map(Box::new),
            part_of_series: input.entity(Field::PartOfSeries)?.map(Box::new),
            production_company: input.node(&PRODUCTION_COMPANY)?.map(Box::new),
            trailer: input.entity(Field::Trailer)?.map(Box::new),
            is_accessible_for_free: input.scalar(Field::IsAccessibleForFree)?,
        })
    }
}

/// A season of a series: an ordered group of episodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreativeWorkSeason {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    season_number: Option<i32>,
    number_of_episodes: Option<i32>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    episodes: Option<Vec<Episode>>,
    part_of_series: Option<Box<CreativeWorkSeries>>,
    production_company: Option<Box<Node>>,
    trailer: Option<Box<VideoObject>>,
}

impl CreativeWorkSeason {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    accessors! {
        copy season_number: i32, set_season_number, clear_season_number;
        copy number_of_episodes: i32, set_number_of_episodes, clear_number_of_episodes;
        copy start_date: NaiveDate, set_start_date, clear_start_date;
        copy end_date: NaiveDate, set_end_date, clear_end_date;
        list episodes: Episode, set_episodes, push_episode, episodes_mut, clear_episodes;
        entity part_of_series: CreativeWorkSeries, set_part_of_series, clear_part_of_series;
        node production_company: PRODUCTION_COMPANY, set_production_company, clear_production_company;
        entity trailer: VideoObject, set_trailer, clear_trailer;
    }
}

impl Entity for CreativeWorkSeason {
    const KIND: Kind = Kind::CreativeWorkSeason;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        out.scalar(Field::SeasonNumber, self.season_number.as_ref());
        out.scalar(Field::NumberOfEpisodes, self.number_of_episodes.as_ref());
        out.scalar(Field::StartDate, self.start_date.as_ref());
        out.scalar(Field::EndDate, self.end_date.as_ref());
        out.entities(Field::Episodes, self.episodes.as_deref());
        out.entity(Field::PartOfSeries, self.part_of_series.as_deref());
        out.node(Field::ProductionCompany, self.production_company.as_deref());
        out.entity(Field::Trailer, self.trailer.as_deref());
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            season_number: input.scalar(Field::SeasonNumber)?,
            number_of_episodes: input.scalar(Field::NumberOfEpisodes)?,
            start_date: input.scalar(Field::StartDate)?,
            end_date: input.scalar(Field::EndDate)?,
            episodes: input.entities(Field::Episodes)?,
            part_of_series: input.entity(Field::PartOfSeries)?.map(Box::new),
            production_company: input.node(&PRODUCTION_COMPANY)?.map(Box::new),
            trailer: input.entity(Field::Trailer)?.map(Box::new),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreativeWorkSeries {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    issn: Option<String>,
}

impl CreativeWorkSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    accessors! {
        copy start_date: NaiveDate, set_start_date, clear_start_date;
        copy end_date: NaiveDate, set_end_date, clear_end_date;
        text issn, set_issn, clear_issn;
    }
}

impl Entity for CreativeWorkSeries {
    const KIND: Kind = Kind::CreativeWorkSeries;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        out.scalar(Field::StartDate, self.start_date.as_ref());
        out.scalar(Field::EndDate, self.end_date.as_ref());
        out.scalar(Field::Issn, self.issn.as_ref());
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            start_date: input.scalar(Field::StartDate)?,
            end_date: input.scalar(Field::EndDate)?,
            issn: input.scalar(Field::Issn)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaObject {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    pub(super) media_object: MediaObjectProperties,
}

impl MediaObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Entity for MediaObject {
    const KIND: Kind = Kind::MediaObject;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        self.media_object.write_fields(out);
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            media_object: MediaObjectProperties::read_fields(input)?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoObject {
    pub(super) thing: ThingProperties,
    pub(super) creative_work: CreativeWorkProperties,
    pub(super) media_object: MediaObjectProperties,
    caption: Option<String>,
    video_frame_size: Option<String>,
    video_quality: Option<String>,
}

impl VideoObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    accessors! {
        text caption, set_caption, clear_caption;
        /// Frame size such as `1920x1080`.
        text video_frame_size, set_video_frame_size, clear_video_frame_size;
        /// Quality label such as `HD`.
        text video_quality, set_video_quality, clear_video_quality;
    }
}

impl Entity for VideoObject {
    const KIND: Kind = Kind::VideoObject;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        self.creative_work.write_fields(out);
        self.media_object.write_fields(out);
        out.scalar(Field::Caption, self.caption.as_ref());
        out.scalar(Field::VideoFrameSize, self.video_frame_size.as_ref());
        out.scalar(Field::VideoQuality, self.video_quality.as_ref());
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            creative_work: CreativeWorkProperties::read_fields(input)?,
            media_object: MediaObjectProperties::read_fields(input)?,
            caption: input.scalar(Field::Caption)?,
            video_frame_size: input.scalar(Field::VideoFrameSize)?,
            video_quality: input.scalar(Field::VideoQuality)?,
        })
    }
}
