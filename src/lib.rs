//! Typed schema.org entities with JSON-LD output.
//!
//! Entity types mirror the schema.org inheritance tree through composition:
//! each concrete type embeds the property groups of its ancestors and exposes
//! them through the `Has*` traits. Attributes that accept several kinds hold a
//! [`Node`](vocabulary::Node) and reject disallowed kinds at assignment time.
//!
//! ```
//! use microdata_rs::serializer::{Serializer, SerializerSettings};
//! use microdata_rs::vocabulary::{Episode, HasThing, Person};
//!
//! let mut episode = Episode::new();
//! episode.set_episode_number(5).set_actor(Person::named("Jane"));
//!
//! let value = Serializer::new(SerializerSettings::bare()).entity_to_value(&episode);
//! assert_eq!(
//!     value,
//!     serde_json::json!({ "episodeNumber": 5, "actor": { "name": "Jane" } })
//! );
//! ```

pub mod config;
pub mod errors;
pub mod logger;
pub mod serializer;
pub mod vocabulary;

pub use errors::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;
