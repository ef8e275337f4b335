use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::MessagingProvider;
use crate::errors::AppError;
use crate::models::Credentials;

#[derive(Serialize)]
struct SendSmsRequest<'a> {
    sender: &'a str,
    message: &'a str,
    recipients: [&'a str; 1],
}

pub struct ArkeselSmsProvider {
    api_url: String,
    client: reqwest::Client,
}

impl ArkeselSmsProvider {
    pub fn new(api_url: String, timeout_secs: u64) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { api_url, client })
    }
}

#[async_trait]
impl MessagingProvider for ArkeselSmsProvider {
    async fn send_message(
        &self,
        credentials: &Credentials,
        to: &str,
        body: &str,
    ) -> anyhow::Result<()> {
        let payload = SendSmsRequest {
            sender: &credentials.sender_id,
            message: body,
            recipients: [to],
        };

        // The response body carries nothing we act on; status alone decides.
        self.client
            .post(&self.api_url)
            .header("api-key", &credentials.api_key)
            .json(&payload)
            .send()
            .await
            .context("failed to send Arkesel SMS")?
            .error_for_status()
            .context("Arkesel API returned error")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};

    use super::*;
    use crate::db::{KeyValueStore, MemoryStore};
    use crate::models::{BookingForm, BookingOutcome};
    use crate::services::appointments::AppointmentStore;
    use crate::services::booking::BookingService;
    use crate::services::credentials::CredentialStore;

    type Captured = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

    async fn spawn_gateway(status: StatusCode) -> (String, Captured) {
        spawn_slow_gateway(status, Duration::ZERO).await
    }

    async fn spawn_slow_gateway(status: StatusCode, delay: Duration) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(vec![]));
        let sink = captured.clone();

        let app = Router::new().route(
            "/api/v2/sms/send",
            post(move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    let key = headers
                        .get("api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(|s| s.to_string());
                    sink.lock().unwrap().push((key, body));
                    tokio::time::sleep(delay).await;
                    (status, Json(serde_json::json!({"status": "ok"})))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/api/v2/sms/send"), captured)
    }

    fn creds() -> Credentials {
        Credentials {
            api_key: "key-123".to_string(),
            sender_id: "DentalCare".to_string(),
        }
    }

    #[tokio::test]
    async fn test_sends_expected_request() {
        let (url, captured) = spawn_gateway(StatusCode::OK).await;
        let provider = ArkeselSmsProvider::new(url, 5).unwrap();

        provider
            .send_message(&creds(), "0551234567", "Hello Ama")
            .await
            .unwrap();

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let (key, body) = &captured[0];
        assert_eq!(key.as_deref(), Some("key-123"));
        assert_eq!(
            body,
            &serde_json::json!({
                "sender": "DentalCare",
                "message": "Hello Ama",
                "recipients": ["0551234567"],
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_fails() {
        let (url, _) = spawn_gateway(StatusCode::UNAUTHORIZED).await;
        let provider = ArkeselSmsProvider::new(url, 5).unwrap();

        let result = provider
            .send_message(&creds(), "0551234567", "Hello Ama")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_gateway_fails() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = ArkeselSmsProvider::new(format!("http://{addr}/send"), 2).unwrap();
        let result = provider
            .send_message(&creds(), "0551234567", "Hello Ama")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_slow_gateway_times_out() {
        let (url, captured) = spawn_slow_gateway(StatusCode::OK, Duration::from_secs(3)).await;
        let provider = ArkeselSmsProvider::new(url, 1).unwrap();

        let err = provider
            .send_message(&creds(), "0551234567", "Hello Ama")
            .await
            .unwrap_err();

        let timed_out = err
            .chain()
            .filter_map(|cause| cause.downcast_ref::<reqwest::Error>())
            .any(|e| e.is_timeout());
        assert!(timed_out, "expected a timeout, got {err:#}");
        assert_eq!(captured.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_timeout_books_without_confirmation() {
        let (url, _) = spawn_slow_gateway(StatusCode::OK, Duration::from_secs(3)).await;
        let provider = ArkeselSmsProvider::new(url, 1).unwrap();

        let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let credentials = CredentialStore::new(kv.clone());
        credentials.save("key-123", "DentalCare").unwrap();
        let service = BookingService::new(
            AppointmentStore::new(kv),
            credentials,
            Arc::new(provider),
            "Dental Clinic".to_string(),
        );

        let form = BookingForm {
            name: "Ama Mensah".to_string(),
            phone: "0551234567".to_string(),
            date: "2025-06-16".to_string(),
            time: "10:30".to_string(),
            ..Default::default()
        };
        let outcome = service.submit(form).await.unwrap();

        assert!(matches!(outcome, BookingOutcome::PartialSuccess(_)));
        assert_eq!(service.appointments().len(), 1);
    }
}
