use chrono::NaiveDate;

use crate::serializer::{FieldReader, FieldWriter};
use crate::vocabulary::properties::ThingProperties;
use crate::vocabulary::{Entity, Field, Kind, Node, TypeValidator};
use crate::Result;

pub const AFFILIATION: TypeValidator =
    TypeValidator::new(Field::Affiliation, &[Kind::Organization]);
pub const WORKS_FOR: TypeValidator = TypeValidator::new(Field::WorksFor, &[Kind::Organization]);

/// A person, alive, dead or fictional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Person {
    pub(super) thing: ThingProperties,
    given_name: Option<String>,
    family_name: Option<String>,
    additional_name: Option<String>,
    email: Option<String>,
    telephone: Option<String>,
    job_title: Option<String>,
    birth_date: Option<NaiveDate>,
    affiliation: Option<Box<Node>>,
    works_for: Option<Box<Node>>,
}

impl Person {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    accessors! {
        text given_name, set_given_name, clear_given_name;
        text family_name, set_family_name, clear_family_name;
        /// Middle name or other additional name.
        text additional_name, set_additional_name, clear_additional_name;
        text email, set_email, clear_email;
        text telephone, set_telephone, clear_telephone;
        text job_title, set_job_title, clear_job_title;
        copy birth_date: NaiveDate, set_birth_date, clear_birth_date;
        node affiliation: AFFILIATION, set_affiliation, clear_affiliation;
        /// Employer; any Organization.
        node works_for: WORKS_FOR, set_works_for, clear_works_for;
    }
}

impl Entity for Person {
    const KIND: Kind = Kind::Person;

    fn write_fields(&self, out: &mut FieldWriter<'_>) {
        self.thing.write_fields(out);
        out.scalar(Field::GivenName, self.given_name.as_ref());
        out.scalar(Field::FamilyName, self.family_name.as_ref());
        out.scalar(Field::AdditionalName, self.additional_name.as_ref());
        out.scalar(Field::Email, self.email.as_ref());
        out.scalar(Field::Telephone, self.telephone.as_ref());
        out.scalar(Field::JobTitle, self.job_title.as_ref());
        out.scalar(Field::BirthDate, self.birth_date.as_ref());
        out.node(Field::Affiliation, self.affiliation.as_deref());
        out.node(Field::WorksFor, self.works_for.as_deref());
    }

    fn read_fields(input: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::read_fields(input)?,
            given_name: input.scalar(Field::GivenName)?,
            family_name: input.scalar(Field::FamilyName)?,
            additional_name: input.scalar(Field::AdditionalName)?,
            email: input.scalar(Field::Email)?,
            telephone: input.scalar(Field::Telephone)?,
            job_title: input.scalar(Field::JobTitle)?,
            birth_date: input.scalar(Field::BirthDate)?,
            affiliation: input.node(&AFFILIATION)?.map(Box::new),
            works_for: input.node(&WORKS_FOR)?.map(Box::new),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{Episode, HasThing, MusicGroup, Organization};

    #[test]
    fn works_for_accepts_organization_descendants() {
        let mut person = Person::named("Jane");
        person
            .set_works_for(MusicGroup::named("The Band"))
            .expect("music group employer");
        assert_eq!(person.works_for().map(Node::kind), Some(Kind::MusicGroup));
    }

    #[test]
    fn affiliation_rejects_non_organizations() {
        let mut person = Person::new();
        person
            .set_affiliation(Organization::named("University"))
            .expect("organization affiliation");

        let err = person
            .set_affiliation(Episode::new())
            .expect_err("episode affiliation");
        assert_eq!(err.attribute, Field::Affiliation);
        assert_eq!(err.permitted, vec![Kind::Organization]);
        assert_eq!(
            person.affiliation().and_then(|node| node.thing().name()),
            Some("University")
        );
    }

    #[test]
    fn birth_date_round_trips_through_accessors() {
        let mut person = Person::new();
        let date = NaiveDate::from_ymd_opt(1990, 4, 1).expect("valid date");
        person.set_birth_date(date);
        assert_eq!(person.birth_date(), Some(date));
        person.clear_birth_date();
        assert_eq!(person.birth_date(), None);
    }
}
