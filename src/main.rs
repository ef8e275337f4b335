use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use dental_booking::config::AppConfig;
use dental_booking::db::{KeyValueStore, SqliteStore};
use dental_booking::handlers;
use dental_booking::services::appointments::AppointmentStore;
use dental_booking::services::booking::BookingService;
use dental_booking::services::credentials::CredentialStore;
use dental_booking::services::messaging::arkesel::ArkeselSmsProvider;
use dental_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&config.database_url)?);
    let messaging = ArkeselSmsProvider::new(config.sms_api_url.clone(), config.sms_timeout_secs)?;

    let credentials = CredentialStore::new(kv.clone());
    if credentials.load().is_some() {
        tracing::info!("SMS gateway credentials loaded");
    } else {
        tracing::info!("no SMS gateway credentials yet, setup required");
    }

    let booking = BookingService::new(
        AppointmentStore::new(kv),
        credentials,
        Arc::new(messaging),
        config.clinic_name.clone(),
    );
    tracing::info!(
        appointments = booking.appointments().len(),
        "loaded appointment book"
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        booking,
    });
    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
