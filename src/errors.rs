//! Crate-wide error types.
//!
//! [`TypeConstraintViolation`] is the only error an entity setter can raise.
//! Everything else belongs to the surrounding layers: reading JSON-LD input,
//! loading configuration and installing the logger.

use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use thiserror::Error;

use crate::vocabulary::{DurationError, Field, IriError, Kind};

/// A value of the wrong kind was offered to a polymorphic attribute.
///
/// The attribute keeps whatever it held before the rejected assignment.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("`{offered}` is not permitted for `{attribute}` (expected {})", KindList(.permitted))]
pub struct TypeConstraintViolation {
    /// Attribute that rejected the value.
    pub attribute: Field,
    /// Kind of the rejected value.
    pub offered: Kind,
    /// Kinds the attribute accepts, in declaration order.
    pub permitted: Vec<Kind>,
}

struct KindList<'a>(&'a [Kind]);

impl Display for KindList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, kind) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "`{kind}`")?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TypeConstraint(#[from] TypeConstraintViolation),

    /// `@type` named something outside the vocabulary.
    #[error("unknown kind `{0}`")]
    UnknownKind(String),

    /// A polymorphic slot carried no `@type`. The root object reports `$`.
    #[error("object at `{field}` has no `@type` discriminator")]
    MissingType { field: String },

    /// The root object decoded to a different kind than the one requested.
    #[error("expected a `{expected}` object, found `{found}`")]
    KindMismatch { expected: Kind, found: Kind },

    /// A present value had the wrong JSON shape for its attribute.
    #[error("invalid value for `{field}`: expected {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },

    #[error(transparent)]
    InvalidIri(#[from] IriError),

    #[error(transparent)]
    InvalidDuration(#[from] DurationError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Template(#[from] tera::Error),

    #[error("failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot initialize logger: {0}")]
    Logger(String),
}

impl Error {
    pub(crate) fn invalid_value(field: impl Display, expected: &'static str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            expected,
        }
    }
}
