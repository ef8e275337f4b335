use std::sync::Arc;

use chrono::Utc;

use crate::errors::{AppError, ValidationError};
use crate::models::{
    Appointment, AppointmentStatus, BookingForm, BookingOutcome, Credentials, Delivery,
};
use crate::services::appointments::AppointmentStore;
use crate::services::credentials::CredentialStore;
use crate::services::messaging::MessagingProvider;
use crate::services::phone::is_valid_phone;

/// Validates, stores and confirms bookings.
///
/// Submissions run one at a time: the appointment store's writer lock is held
/// from validation until the SMS attempt has finished.
#[derive(Clone)]
pub struct BookingService {
    appointments: AppointmentStore,
    credentials: CredentialStore,
    messaging: Arc<dyn MessagingProvider>,
    clinic_name: String,
}

impl BookingService {
    pub fn new(
        appointments: AppointmentStore,
        credentials: CredentialStore,
        messaging: Arc<dyn MessagingProvider>,
        clinic_name: String,
    ) -> Self {
        Self {
            appointments,
            credentials,
            messaging,
            clinic_name,
        }
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.appointments.load_all()
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials.load()
    }

    pub fn setup(&self, api_key: &str, sender_id: &str) -> Result<Credentials, AppError> {
        self.credentials.save(api_key, sender_id)
    }

    pub async fn submit(&self, form: BookingForm) -> Result<BookingOutcome, AppError> {
        let guard = self.appointments.lock().await;

        if let Err(e) = validate(&form) {
            tracing::info!(reason = %e, "booking rejected");
            return Ok(BookingOutcome::Rejected(e));
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: self.appointments.next_id(&guard, now)?,
            name: form.name.trim().to_string(),
            phone: form.phone,
            email: form.email.trim().to_string(),
            date: form.date.trim().to_string(),
            time: form.time.trim().to_string(),
            consultation_type: form.consultation_type,
            notes: form.notes.trim().to_string(),
            status: AppointmentStatus::Confirmed,
            created_at: now,
        };
        self.appointments
            .append_locked(&guard, appointment.clone())?;
        tracing::info!(
            id = appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            consultation = appointment.consultation_type.as_str(),
            "appointment booked"
        );

        let message = confirmation_message(&appointment, &self.clinic_name);
        let outcome = match self.notify(&appointment.phone, &message).await {
            Delivery::Delivered => BookingOutcome::Success(appointment),
            Delivery::NotAttempted => BookingOutcome::PartialSuccess(appointment),
        };

        drop(guard);
        Ok(outcome)
    }

    pub async fn cancel(&self, id: u64) -> Result<(), AppError> {
        self.appointments.remove(id).await?;
        tracing::info!(id, "appointment cancelled");
        Ok(())
    }

    async fn notify(&self, phone: &str, message: &str) -> Delivery {
        let Some(credentials) = self.credentials.load() else {
            tracing::warn!("SMS gateway credentials not configured, skipping confirmation");
            return Delivery::NotAttempted;
        };

        match self
            .messaging
            .send_message(&credentials, phone, message)
            .await
        {
            Ok(()) => {
                tracing::info!(to = %phone, "confirmation SMS sent");
                Delivery::Delivered
            }
            Err(e) => {
                tracing::warn!(to = %phone, error = %format!("{e:#}"), "confirmation SMS failed");
                Delivery::NotAttempted
            }
        }
    }
}

fn validate(form: &BookingForm) -> Result<(), ValidationError> {
    let required = [("name", &form.name), ("date", &form.date), ("time", &form.time)];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

pub fn confirmation_message(appointment: &Appointment, clinic_name: &str) -> String {
    format!(
        "Hello {}, your dental appointment for {} has been confirmed for {} at {}. We look forward to seeing you! - {}",
        appointment.name,
        appointment.consultation_type.label(),
        appointment.date,
        appointment.time,
        clinic_name
    )
}
