use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{Appointment, BookingForm, BookingOutcome};
use crate::state::AppState;

// GET /api/appointments
pub async fn list_appointments(State(state): State<Arc<AppState>>) -> Json<Vec<Appointment>> {
    Json(state.booking.appointments())
}

// POST /api/appointments
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    #[serde(rename = "type")]
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    appointment: Option<Appointment>,
    clear_form: bool,
}

impl From<BookingOutcome> for BookingResponse {
    fn from(outcome: BookingOutcome) -> Self {
        Self {
            kind: outcome.kind(),
            message: outcome.message(),
            clear_form: outcome.clears_form(),
            appointment: outcome.appointment().cloned(),
        }
    }
}

pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingForm>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(form) = payload?;
    let outcome = state.booking.submit(form).await?;
    let status = match outcome {
        BookingOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };

    Ok((status, Json(BookingResponse::from(outcome))).into_response())
}

// DELETE /api/appointments/:id
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.booking.cancel(id).await?;

    Ok(Json(serde_json::json!({
        "type": "success",
        "message": "Appointment deleted",
    })))
}
