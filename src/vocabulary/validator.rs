use crate::errors::TypeConstraintViolation;

use super::{Field, Kind, Node};

/// Permitted-kind check guarding one polymorphic attribute.
///
/// Validators are declared as constants next to the attribute they guard and
/// never change afterwards, so a single instance can be shared freely.
/// A value is accepted when its kind is one of the permitted kinds or a
/// descendant of one; ancestors of a permitted kind are rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeValidator {
    attribute: Field,
    permitted: &'static [Kind],
}

impl TypeValidator {
    /// Declares the permitted kinds for `attribute`.
    ///
    /// # Panics
    ///
    /// Panics when `permitted` is empty; in a `const` declaration this is a
    /// compile error.
    #[must_use]
    pub const fn new(attribute: Field, permitted: &'static [Kind]) -> Self {
        assert!(!permitted.is_empty(), "a permitted-kind set cannot be empty");
        Self {
            attribute,
            permitted,
        }
    }

    #[must_use]
    pub fn attribute(&self) -> Field {
        self.attribute
    }

    #[must_use]
    pub fn permitted(&self) -> &'static [Kind] {
        self.permitted
    }

    /// Returns `true` when a value of `kind` may be assigned.
    #[must_use]
    pub fn permits(&self, kind: Kind) -> bool {
        self.permitted.iter().any(|permitted| kind.is_a(*permitted))
    }

    /// Checks a kind before a value of that kind is built or stored.
    pub fn validate_kind(&self, kind: Kind) -> Result<(), TypeConstraintViolation> {
        if self.permits(kind) {
            return Ok(());
        }
        tracing::debug!(
            attribute = %self.attribute,
            offered = %kind,
            "type_constraint_violation"
        );
        Err(TypeConstraintViolation {
            attribute: self.attribute,
            offered: kind,
            permitted: self.permitted.to_vec(),
        })
    }

    /// Checks a candidate value; an absent value is always accepted.
    pub fn validate(&self, value: Option<&Node>) -> Result<(), TypeConstraintViolation> {
        value.map_or(Ok(()), |node| self.validate_kind(node.kind()))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::vocabulary::{MusicGroup, Organization, Person, TheaterGroup, Thing};

    const MUSIC_BY: TypeValidator =
        TypeValidator::new(Field::MusicBy, &[Kind::MusicGroup, Kind::Person]);
    const PRODUCTION_COMPANY: TypeValidator =
        TypeValidator::new(Field::ProductionCompany, &[Kind::Organization]);

    #[rstest]
    #[case(Kind::MusicGroup, true)]
    #[case(Kind::Person, true)]
    #[case(Kind::Organization, false)]
    #[case(Kind::PerformingGroup, false)]
    #[case(Kind::TheaterGroup, false)]
    #[case(Kind::Thing, false)]
    #[case(Kind::Episode, false)]
    fn union_accepts_listed_kinds_only(#[case] kind: Kind, #[case] accepted: bool) {
        assert_eq!(MUSIC_BY.validate_kind(kind).is_ok(), accepted);
    }

    #[rstest]
    #[case(Kind::Organization, true)]
    #[case(Kind::PerformingGroup, true)]
    #[case(Kind::MusicGroup, true)]
    #[case(Kind::TheaterGroup, true)]
    #[case(Kind::Thing, false)]
    #[case(Kind::Person, false)]
    fn descendants_are_accepted_ancestors_are_not(#[case] kind: Kind, #[case] accepted: bool) {
        assert_eq!(PRODUCTION_COMPANY.permits(kind), accepted);
    }

    #[test]
    fn absent_value_is_always_accepted() {
        assert_eq!(MUSIC_BY.validate(None), Ok(()));
    }

    #[test]
    fn validates_runtime_values() {
        assert!(MUSIC_BY.validate(Some(&Person::new().into())).is_ok());
        assert!(MUSIC_BY.validate(Some(&MusicGroup::new().into())).is_ok());

        let err = MUSIC_BY
            .validate(Some(&Organization::new().into()))
            .expect_err("organization is not permitted");
        assert_eq!(
            err,
            TypeConstraintViolation {
                attribute: Field::MusicBy,
                offered: Kind::Organization,
                permitted: vec![Kind::MusicGroup, Kind::Person],
            }
        );
    }

    #[test]
    fn structurally_identical_sibling_is_rejected() {
        let group: Node = TheaterGroup::new().into();
        assert!(MUSIC_BY.validate(Some(&group)).is_err());
        assert!(MUSIC_BY.validate(Some(&Thing::new().into())).is_err());
    }

    #[test]
    fn validator_is_shareable_across_threads() {
        let handles: Vec<_> = [Kind::Person, Kind::Organization]
            .into_iter()
            .map(|kind| std::thread::spawn(move || MUSIC_BY.permits(kind)))
            .collect();
        let results: Vec<bool> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread finished"))
            .collect();
        assert_eq!(results, vec![true, false]);
    }
}
