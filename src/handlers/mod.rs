pub mod appointments;
pub mod health;
pub mod setup;

use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/setup", get(setup::get_setup).post(setup::save_setup))
        .route(
            "/api/appointments",
            get(appointments::list_appointments).post(appointments::book_appointment),
        )
        .route("/api/appointments/:id", delete(appointments::cancel_appointment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
