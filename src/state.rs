use crate::config::AppConfig;
use crate::services::booking::BookingService;

pub struct AppState {
    pub config: AppConfig,
    pub booking: BookingService,
}
