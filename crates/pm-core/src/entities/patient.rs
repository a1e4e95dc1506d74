use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, require_email};
use crate::errors::CoreError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A patient record as returned by `GET /patients`.
///
/// Every field defaults to empty so partially populated records from the
/// server still render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub date_of_birth: String,
}

impl Patient {
    /// Date of birth cut to its `YYYY-MM-DD` prefix.
    #[must_use]
    pub fn date_of_birth_display(&self) -> &str {
        self.date_of_birth
            .char_indices()
            .nth(10)
            .map_or(self.date_of_birth.as_str(), |(end, _)| {
                &self.date_of_birth[..end]
            })
    }

    /// Pre-fill an update body from an existing record.
    ///
    /// The registration date is never part of an update.
    #[must_use]
    pub fn to_input(&self) -> PatientInput {
        PatientInput {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            date_of_birth: self.date_of_birth_display().to_string(),
            registered_date: None,
        }
    }
}

/// Body of `POST /patients` and `PUT /patients/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatientInput {
    pub name: String,
    pub email: String,
    pub address: String,
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_date: Option<String>,
}

impl PatientInput {
    /// Build a body with every text field trimmed.
    #[must_use]
    pub fn new(name: &str, email: &str, address: &str, date_of_birth: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            address: address.trim().to_string(),
            date_of_birth: date_of_birth.trim().to_string(),
            registered_date: None,
        }
    }

    #[must_use]
    pub fn with_registered_date(mut self, registered_date: &str) -> Self {
        self.registered_date = Some(registered_date.trim().to_string());
        self
    }

    /// Drop the registration date, as updates must not send it.
    #[must_use]
    pub fn for_update(mut self) -> Self {
        self.registered_date = None;
        self
    }

    /// # Errors
    ///
    /// Returns `CoreError` for a missing field, a malformed email, or a date
    /// that is not `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require_email("email", &self.email)?;
        require("address", &self.address)?;
        require_date("dateOfBirth", &self.date_of_birth)?;
        if let Some(registered) = &self.registered_date {
            require_date("registeredDate", registered)?;
        }
        Ok(())
    }
}

fn require_date(field: &'static str, value: &str) -> Result<(), CoreError> {
    require(field, value)?;
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|e| CoreError::InvalidField {
            field,
            reason: format!("'{value}' is not a YYYY-MM-DD date ({e})"),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_input() -> PatientInput {
        PatientInput::new(" Jane Doe ", "jane@example.com", " 1 Main St ", "1990-04-12")
    }

    #[test]
    fn date_of_birth_display_truncates_timestamps() {
        let patient = Patient {
            date_of_birth: "1990-04-12T00:00:00Z".into(),
            ..Default::default()
        };
        assert_eq!(patient.date_of_birth_display(), "1990-04-12");
    }

    #[test]
    fn date_of_birth_display_keeps_short_values() {
        let patient = Patient {
            date_of_birth: "1990".into(),
            ..Default::default()
        };
        assert_eq!(patient.date_of_birth_display(), "1990");
    }

    #[test]
    fn patient_parses_camel_case_and_missing_fields() {
        let patient: Patient =
            serde_json::from_str(r#"{"id":"1","name":"Jane","dateOfBirth":"1990-04-12","extra":true}"#)
                .expect("parse");
        assert_eq!(patient.id, "1");
        assert_eq!(patient.date_of_birth, "1990-04-12");
        assert!(patient.email.is_empty());
    }

    #[test]
    fn input_trims_fields() {
        let input = valid_input();
        assert_eq!(input.name, "Jane Doe");
        assert_eq!(input.address, "1 Main St");
    }

    #[test]
    fn registered_date_only_serialized_when_set() {
        let without = serde_json::to_value(valid_input()).expect("serialize");
        assert!(without.get("registeredDate").is_none());

        let with = serde_json::to_value(valid_input().with_registered_date("2024-01-01"))
            .expect("serialize");
        assert_eq!(with["registeredDate"], "2024-01-01");
        assert_eq!(with["dateOfBirth"], "1990-04-12");
    }

    #[test]
    fn for_update_strips_registered_date() {
        let input = valid_input().with_registered_date("2024-01-01").for_update();
        assert!(input.registered_date.is_none());
    }

    #[test]
    fn validate_accepts_complete_input() {
        assert!(valid_input().with_registered_date("2024-01-01").validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_date() {
        let mut input = valid_input();
        input.date_of_birth = "12/04/1990".into();
        let err = input.validate().unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { field: "dateOfBirth", .. }));
    }

    #[test]
    fn validate_rejects_missing_address() {
        let input = PatientInput::new("Jane", "jane@example.com", "  ", "1990-04-12");
        assert_eq!(
            input.validate().unwrap_err(),
            CoreError::MissingField { field: "address" }
        );
    }

    #[test]
    fn to_input_prefills_from_record() {
        let patient = Patient {
            id: "p1".into(),
            name: "Jane".into(),
            email: "jane@example.com".into(),
            address: "1 Main St".into(),
            date_of_birth: "1990-04-12T00:00:00".into(),
        };
        let input = patient.to_input();
        assert_eq!(input.date_of_birth, "1990-04-12");
        assert!(input.registered_date.is_none());
    }
}
