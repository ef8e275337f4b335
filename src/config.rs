use std::env;

pub const DEFAULT_SMS_API_URL: &str = "https://sms.arkesel.com/api/v2/sms/send";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub sms_api_url: String,
    pub sms_timeout_secs: u64,
    pub clinic_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "dental_booking.db".to_string()),
            sms_api_url: env::var("SMS_API_URL")
                .unwrap_or_else(|_| DEFAULT_SMS_API_URL.to_string()),
            sms_timeout_secs: env::var("SMS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            clinic_name: env::var("CLINIC_NAME").unwrap_or_else(|_| "Dental Clinic".to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: ":memory:".to_string(),
            sms_api_url: DEFAULT_SMS_API_URL.to_string(),
            sms_timeout_secs: 30,
            clinic_name: "Dental Clinic".to_string(),
        }
    }
}
