use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub date: String,
    pub time: String,
    pub consultation_type: ConsultationType,
    #[serde(default)]
    pub notes: String,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    #[default]
    Initial,
    Followup,
    Fitting,
    Adjustment,
}

impl ConsultationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationType::Initial => "initial",
            ConsultationType::Followup => "followup",
            ConsultationType::Fitting => "fitting",
            ConsultationType::Adjustment => "adjustment",
        }
    }

    /// Human-readable name used in confirmation messages.
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::Initial => "Initial Consultation",
            ConsultationType::Followup => "Follow-up",
            ConsultationType::Fitting => "Braces Fitting",
            ConsultationType::Adjustment => "Adjustment",
        }
    }
}

// Cancellation deletes the record, so there is nothing to transition to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Confirmed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "confirmed",
        }
    }
}
