use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

// GET /api/setup
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupResponse {
    screen: &'static str,
    sender_id: Option<String>,
    clinic_name: String,
}

pub async fn get_setup(State(state): State<Arc<AppState>>) -> Json<SetupResponse> {
    let creds = state.booking.credentials();
    let screen = if creds.is_some() { "booking" } else { "setup" };

    Json(SetupResponse {
        screen,
        sender_id: creds.map(|c| c.sender_id),
        clinic_name: state.config.clinic_name.clone(),
    })
}

// POST /api/setup
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub sender_id: String,
}

pub async fn save_setup(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SetupRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(body) = payload?;
    state.booking.setup(&body.api_key, &body.sender_id)?;

    Ok(Json(serde_json::json!({
        "type": "success",
        "message": "API credentials saved!",
    })))
}
