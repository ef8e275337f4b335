use serde::{Deserialize, Serialize};

use super::{Appointment, ConsultationType};
use crate::errors::ValidationError;

/// Fields submitted from the booking screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub time: String,
    pub consultation_type: ConsultationType,
    pub notes: String,
}

/// Result of handing one message to the SMS gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    NotAttempted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Booked and the confirmation SMS went out.
    Success(Appointment),
    /// Booked, but the SMS failed. The appointment is kept.
    PartialSuccess(Appointment),
    /// Nothing was stored.
    Rejected(ValidationError),
}

impl BookingOutcome {
    pub fn appointment(&self) -> Option<&Appointment> {
        match self {
            BookingOutcome::Success(apt) | BookingOutcome::PartialSuccess(apt) => Some(apt),
            BookingOutcome::Rejected(_) => None,
        }
    }

    pub fn clears_form(&self) -> bool {
        !matches!(self, BookingOutcome::Rejected(_))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BookingOutcome::Success(_) => "success",
            BookingOutcome::PartialSuccess(_) => "warning",
            BookingOutcome::Rejected(_) => "error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            BookingOutcome::Success(_) => {
                "Appointment booked successfully! SMS confirmation sent.".to_string()
            }
            BookingOutcome::PartialSuccess(_) => {
                "Appointment booked, but SMS notification failed. Please check your API credentials."
                    .to_string()
            }
            BookingOutcome::Rejected(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_defaults_to_initial() {
        let form: BookingForm =
            serde_json::from_str(r#"{"name":"Kofi","phone":"0241234567"}"#).unwrap();
        assert_eq!(form.consultation_type, ConsultationType::Initial);
        assert!(form.email.is_empty());
        assert!(form.notes.is_empty());
    }

    #[test]
    fn test_rejected_keeps_form() {
        let outcome = BookingOutcome::Rejected(ValidationError::InvalidPhone);
        assert!(!outcome.clears_form());
        assert!(outcome.appointment().is_none());
        assert_eq!(outcome.kind(), "error");
        assert_eq!(outcome.message(), "Please enter a valid Ghana phone number");
    }
}
