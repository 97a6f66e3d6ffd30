use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::NaiveDate;
use oxrdf::NamedNode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Absolute IRI used for `@id`, `@context` and URL-valued attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validates and constructs a new [`Iri`].
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        if NamedNode::new(value.as_str()).is_err() {
            return Err(IriError::Invalid { value });
        }
        Ok(Self { value })
    }

    /// The schema.org vocabulary IRI, the default `@context`.
    #[must_use]
    pub fn schema_org() -> Self {
        Self {
            value: "https://schema.org".to_owned(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = IriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Iri {
    type Error = IriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.value
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

fn duration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$",
        )
        .expect("duration pattern compiles")
    })
}

/// ISO-8601 duration such as `PT1H30M` or `P2W`.
///
/// Components are kept as written; `PT90M` stays ninety minutes and is not
/// normalized into hours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Duration {
    /// Parses ISO-8601 duration text.
    pub fn parse(text: &str) -> Result<Self, DurationError> {
        let invalid = || DurationError::Invalid {
            value: text.to_owned(),
        };
        // A bare `P` or a dangling `T` carries no component.
        if text.len() < 3 || text.ends_with('T') {
            return Err(invalid());
        }
        let captures = duration_pattern().captures(text).ok_or_else(invalid)?;
        let component = |index: usize| -> Result<u32, DurationError> {
            captures
                .get(index)
                .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| invalid()))
        };
        Ok(Self {
            years: component(1)?,
            months: component(2)?,
            weeks: component(3)?,
            days: component(4)?,
            hours: component(5)?,
            minutes: component(6)?,
            seconds: component(7)?,
        })
    }

    /// Builds a time-only duration split into hours, minutes and seconds.
    #[must_use]
    pub fn from_secs(total: u64) -> Self {
        let hours = u32::try_from(total / 3600).unwrap_or(u32::MAX);
        Self {
            hours,
            // both remainders are below 60
            minutes: (total % 3600 / 60) as u32,
            seconds: (total % 60) as u32,
            ..Self::default()
        }
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self::from_secs(value.as_secs())
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("P")?;
        for (amount, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if amount > 0 {
                write!(f, "{amount}{unit}")?;
            }
        }
        let time = [(self.hours, 'H'), (self.minutes, 'M'), (self.seconds, 'S')];
        if time.iter().any(|(amount, _)| *amount > 0) {
            f.write_str("T")?;
            for (amount, unit) in time {
                if amount > 0 {
                    write!(f, "{amount}{unit}")?;
                }
            }
        } else if self == &Self::default() {
            f.write_str("T0S")?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("invalid ISO-8601 duration: {value}")]
    Invalid { value: String },
}

/// A plain attribute value with a fixed JSON representation.
pub trait Scalar: Sized {
    /// Human readable description used in error messages.
    const EXPECTED: &'static str;

    fn to_json(&self) -> Value;

    /// Returns `None` when `value` has the wrong shape.
    fn from_json(value: &Value) -> Option<Self>;
}

impl Scalar for String {
    const EXPECTED: &'static str = "text";

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Scalar for i32 {
    const EXPECTED: &'static str = "an integer";

    fn to_json(&self) -> Value {
        Value::from(*self)
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|number| i32::try_from(number).ok())
    }
}

impl Scalar for bool {
    const EXPECTED: &'static str = "a boolean";

    fn to_json(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Scalar for Iri {
    const EXPECTED: &'static str = "an absolute IRI";

    fn to_json(&self) -> Value {
        Value::String(self.value.clone())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().and_then(|text| Self::new(text).ok())
    }
}

impl Scalar for NaiveDate {
    const EXPECTED: &'static str = "an ISO-8601 date";

    fn to_json(&self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_str()
            .and_then(|text| Self::parse_from_str(text, "%Y-%m-%d").ok())
    }
}

impl Scalar for Duration {
    const EXPECTED: &'static str = "an ISO-8601 duration";

    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().and_then(|text| Self::parse(text).ok())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_valid_iri() {
        let iri = Iri::new("https://example.org/episodes/1").expect("valid IRI");
        assert_eq!(iri.as_str(), "https://example.org/episodes/1");
    }

    #[test]
    fn rejects_invalid_iri() {
        let err = Iri::new("not an iri").expect_err("invalid IRI");
        assert!(matches!(err, IriError::Invalid { value } if value == "not an iri"));
    }

    #[test]
    fn iri_deserializes_through_validation() {
        let ok: Iri = serde_json::from_value(json!("https://schema.org")).expect("valid");
        assert_eq!(ok.to_string(), "https://schema.org");
        assert!(serde_json::from_value::<Iri>(json!("schema org")).is_err());
    }

    #[rstest]
    #[case("PT1H30M", Duration { hours: 1, minutes: 30, ..Duration::default() })]
    #[case("P2W", Duration { weeks: 2, ..Duration::default() })]
    #[case("P1Y2M3DT4H5M6S", Duration { years: 1, months: 2, days: 3, hours: 4, minutes: 5, seconds: 6, ..Duration::default() })]
    #[case("PT90M", Duration { minutes: 90, ..Duration::default() })]
    fn parses_and_prints_durations(#[case] text: &str, #[case] expected: Duration) {
        let parsed = Duration::parse(text).expect("valid duration");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), text);
    }

    #[rstest]
    #[case("P")]
    #[case("PT")]
    #[case("P1DT")]
    #[case("1H")]
    #[case("PT1.5H")]
    #[case("")]
    fn rejects_malformed_durations(#[case] text: &str) {
        assert!(Duration::parse(text).is_err(), "{text}");
    }

    #[test]
    fn converts_std_durations() {
        let duration = Duration::from(std::time::Duration::from_secs(3725));
        assert_eq!(duration.to_string(), "PT1H2M5S");
        assert_eq!(Duration::default().to_string(), "PT0S");
    }

    #[test]
    fn scalars_reject_wrong_shapes() {
        assert_eq!(i32::from_json(&json!(5)), Some(5));
        assert_eq!(i32::from_json(&json!("5")), None);
        assert_eq!(i32::from_json(&json!(5_000_000_000_i64)), None);
        assert_eq!(bool::from_json(&json!(1)), None);
        assert_eq!(
            NaiveDate::from_json(&json!("2024-02-29")),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(NaiveDate::from_json(&json!("2023-02-29")), None);
    }
}
