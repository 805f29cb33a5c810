//! Visit data model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Validation errors returned by [`NewVisit::new`].
///
/// Variants are ordered to match the contract's fail-fast checks: the pet
/// identifier is judged before the date, and the date before the
/// description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitValidationError {
    InvalidPetId,
    MissingDate,
    MissingDescription,
}

impl fmt::Display for VisitValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPetId => write!(f, "visit pet id must be a positive integer"),
            Self::MissingDate => write!(f, "visit date must be provided"),
            Self::MissingDescription => {
                write!(f, "visit description must be provided and non-blank")
            }
        }
    }
}

impl std::error::Error for VisitValidationError {}

/// Persisted record of a pet's appointment.
///
/// ## Invariants
/// - `pet_id` is positive.
/// - `description` is non-blank.
///
/// The identifier is assigned by the store; a `Visit` only exists once the
/// store has returned it, and it is immutable from then on. Construct one by
/// validating a [`NewVisit`] and handing it to a store, or via
/// [`NewVisit::into_persisted`] inside store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "VisitDto", into = "VisitDto")]
pub struct Visit {
    id: i32,
    pet_id: i32,
    date: NaiveDate,
    description: String,
}

impl Visit {
    /// Store-assigned identifier.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Identifier of the pet this visit belongs to.
    pub fn pet_id(&self) -> i32 {
        self.pet_id
    }

    /// Calendar date of the appointment.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Free-text description of the appointment.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Validated visit awaiting persistence.
///
/// The only constructor enforces the record invariants, so a `NewVisit` in
/// hand is always safe to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pet_id: i32,
    date: NaiveDate,
    description: String,
}

impl NewVisit {
    /// Validate the raw inputs of a create request.
    ///
    /// Checks fail fast in contract order: positive pet id, then date
    /// presence, then a present and non-blank description.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use visits_service::domain::NewVisit;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date");
    /// let visit = NewVisit::new(111, Some(date), Some("Routine checkup".into()))?;
    /// assert_eq!(visit.pet_id(), 111);
    /// # Ok::<(), visits_service::domain::VisitValidationError>(())
    /// ```
    pub fn new(
        pet_id: i32,
        date: Option<NaiveDate>,
        description: Option<String>,
    ) -> Result<Self, VisitValidationError> {
        if pet_id < 1 {
            return Err(VisitValidationError::InvalidPetId);
        }
        let date = date.ok_or(VisitValidationError::MissingDate)?;
        let description = match description {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(VisitValidationError::MissingDescription),
        };

        Ok(Self {
            pet_id,
            date,
            description,
        })
    }

    /// Identifier of the pet this visit belongs to.
    pub fn pet_id(&self) -> i32 {
        self.pet_id
    }

    /// Calendar date of the appointment.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Free-text description of the appointment.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Promote the validated visit to a persisted record with the
    /// store-assigned identifier.
    pub fn into_persisted(self, id: i32) -> Visit {
        let Self {
            pet_id,
            date,
            description,
        } = self;
        Visit {
            id,
            pet_id,
            date,
            description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VisitDto {
    id: i32,
    pet_id: i32,
    date: NaiveDate,
    description: String,
}

impl From<Visit> for VisitDto {
    fn from(value: Visit) -> Self {
        let Visit {
            id,
            pet_id,
            date,
            description,
        } = value;
        Self {
            id,
            pet_id,
            date,
            description,
        }
    }
}

impl TryFrom<VisitDto> for Visit {
    type Error = VisitValidationError;

    fn try_from(value: VisitDto) -> Result<Self, Self::Error> {
        let VisitDto {
            id,
            pet_id,
            date,
            description,
        } = value;

        Ok(NewVisit::new(pet_id, Some(date), Some(description))?.into_persisted(id))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn april_seventh() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 7).expect("valid date")
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MIN)]
    fn rejects_non_positive_pet_ids(#[case] pet_id: i32) {
        let outcome = NewVisit::new(
            pet_id,
            Some(april_seventh()),
            Some("Routine checkup".to_owned()),
        );
        assert_eq!(outcome, Err(VisitValidationError::InvalidPetId));
    }

    #[test]
    fn rejects_missing_date() {
        let outcome = NewVisit::new(111, None, Some("Routine checkup".to_owned()));
        assert_eq!(outcome, Err(VisitValidationError::MissingDate));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn rejects_missing_or_blank_description(#[case] description: Option<String>) {
        let outcome = NewVisit::new(111, Some(april_seventh()), description);
        assert_eq!(outcome, Err(VisitValidationError::MissingDescription));
    }

    #[test]
    fn pet_id_check_wins_over_missing_fields() {
        let outcome = NewVisit::new(0, None, None);
        assert_eq!(outcome, Err(VisitValidationError::InvalidPetId));
    }

    #[test]
    fn date_check_wins_over_missing_description() {
        let outcome = NewVisit::new(111, None, None);
        assert_eq!(outcome, Err(VisitValidationError::MissingDate));
    }

    #[test]
    fn into_persisted_carries_validated_fields() {
        let visit = NewVisit::new(
            111,
            Some(april_seventh()),
            Some("Routine checkup".to_owned()),
        )
        .expect("valid visit")
        .into_persisted(1);

        assert_eq!(visit.id(), 1);
        assert_eq!(visit.pet_id(), 111);
        assert_eq!(visit.date(), april_seventh());
        assert_eq!(visit.description(), "Routine checkup");
    }

    #[test]
    fn serialises_camel_case_with_iso_date() {
        let visit = NewVisit::new(
            111,
            Some(april_seventh()),
            Some("Routine checkup".to_owned()),
        )
        .expect("valid visit")
        .into_persisted(1);

        let value = serde_json::to_value(&visit).expect("serialise visit");
        assert_eq!(
            value,
            json!({
                "id": 1,
                "petId": 111,
                "date": "2025-04-07",
                "description": "Routine checkup"
            })
        );
    }

    #[test]
    fn deserialise_enforces_record_invariants() {
        let raw = json!({
            "id": 1,
            "petId": 0,
            "date": "2025-04-07",
            "description": "Routine checkup"
        });
        assert!(serde_json::from_value::<Visit>(raw).is_err());
    }

    #[test]
    fn deserialise_round_trips() {
        let visit = NewVisit::new(
            222,
            Some(april_seventh()),
            Some("Vaccination".to_owned()),
        )
        .expect("valid visit")
        .into_persisted(9);

        let raw = serde_json::to_string(&visit).expect("serialise visit");
        let parsed: Visit = serde_json::from_str(&raw).expect("deserialise visit");
        assert_eq!(parsed, visit);
    }
}
