use microdata_rs::{
    serializer::{Serializer, SerializerSettings},
    vocabulary::{
        CreativeWorkSeason, CreativeWorkSeries, Duration, Episode, Field, HasCreativeWork,
        HasThing, Kind, MusicGroup, Node, Organization, Person, VideoObject,
    },
};
use rstest::rstest;
use serde_json::json;

fn bare() -> Serializer {
    Serializer::new(SerializerSettings::bare())
}

#[test]
fn episode_with_number_and_actor_serializes_to_exact_shape() {
    let mut episode = Episode::new();
    episode.set_episode_number(5);
    episode.set_actor(Person::named("Jane"));

    assert_eq!(
        bare().entity_to_value(&episode),
        json!({ "episodeNumber": 5, "actor": { "name": "Jane" } })
    );
}

#[rstest]
#[case(Person::named("Jane").into(), true)]
#[case(MusicGroup::named("The Band").into(), true)]
#[case(Organization::named("Studio").into(), false)]
#[case(Episode::new().into(), false)]
fn music_by_accepts_only_music_groups_and_people(#[case] composer: Node, #[case] accepted: bool) {
    let mut episode = Episode::new();
    let kind = composer.kind();
    assert_eq!(episode.set_music_by(composer).is_ok(), accepted);
    assert_eq!(
        episode.music_by().map(Node::kind),
        accepted.then_some(kind)
    );
}

#[test]
fn rejected_music_by_reports_the_permitted_kinds() {
    let mut episode = Episode::new();
    let err = episode
        .set_music_by(Organization::named("Studio"))
        .expect_err("organization composer");

    assert_eq!(err.attribute, Field::MusicBy);
    assert_eq!(err.offered, Kind::Organization);
    assert_eq!(err.permitted, vec![Kind::MusicGroup, Kind::Person]);
    assert_eq!(
        err.to_string(),
        "`Organization` is not permitted for `musicBy` (expected `MusicGroup` or `Person`)"
    );
    assert_eq!(bare().entity_to_value(&episode), json!({}));
}

#[test]
fn empty_episode_serializes_to_its_discriminator_only() {
    let serializer = Serializer::new(SerializerSettings::default().with_context(None));
    assert_eq!(
        serializer.entity_to_value(&Episode::new()),
        json!({ "@type": "Episode" })
    );
    assert_eq!(bare().entity_to_value(&Episode::new()), json!({}));
}

#[test]
fn fully_populated_episode_uses_external_names() {
    let mut series = CreativeWorkSeries::named("Chronicles");
    series.set_issn("1234-5678");

    let mut season = CreativeWorkSeason::named("Season 1");
    season.set_season_number(1);

    let mut trailer = VideoObject::named("Teaser");
    trailer.set_video_quality("HD");

    let mut episode = Episode::named("Pilot");
    episode
        .set_episode_number(1)
        .set_duration(Duration::parse("PT42M").expect("duration"))
        .set_is_accessible_for_free(true)
        .set_part_of_series(series)
        .set_part_of_season(season)
        .set_trailer(trailer)
        .set_directors([Person::named("Ann"), Person::named("Bob")]);
    episode
        .set_production_company(Organization::named("Studio"))
        .expect("organization studio");
    episode.creative_work_mut().set_in_language("en");

    assert_eq!(
        bare().entity_to_value(&episode),
        json!({
            "name": "Pilot",
            "inLanguage": "en",
            "episodeNumber": 1,
            "duration": "PT42M",
            "isAccessibleForFree": true,
            "partOfSeries": { "name": "Chronicles", "issn": "1234-5678" },
            "partOfSeason": { "name": "Season 1", "seasonNumber": 1 },
            "trailer": { "name": "Teaser", "videoQuality": "HD" },
            "directors": [{ "name": "Ann" }, { "name": "Bob" }],
            "productionCompany": { "name": "Studio" },
        })
    );
}

#[test]
fn season_keeps_episode_order() {
    let mut season = CreativeWorkSeason::new();
    for number in [3, 1, 2] {
        let mut episode = Episode::new();
        episode.set_episode_number(number);
        season.push_episode(episode);
    }

    assert_eq!(
        bare().entity_to_value(&season),
        json!({
            "episodes": [
                { "episodeNumber": 3 },
                { "episodeNumber": 1 },
                { "episodeNumber": 2 },
            ],
        })
    );
}

#[test]
fn present_empty_list_is_kept() {
    let mut episode = Episode::new();
    episode.set_actors(Vec::new());
    assert_eq!(bare().entity_to_value(&episode), json!({ "actors": [] }));

    episode.clear_actors();
    assert_eq!(bare().entity_to_value(&episode), json!({}));
}
