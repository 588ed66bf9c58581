use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::utils::error::{AppError, AppResult};

/// Best-effort event notification. One delivery attempt per call, no
/// retries.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn publish(&self, subject: &str, message: &str) -> AppResult<()>;
}

/// Fire-and-forget dispatch: transport failures are logged, never returned,
/// so a broken notifier cannot fail a signup, login or booking.
pub async fn dispatch(notifier: &dyn Notifier, subject: &str, message: &str) {
    if let Err(err) = notifier.publish(subject, message).await {
        warn!(subject, error = %err, "failed to send notification");
    }
}

/// No-op notifier used by the in-memory variant.
#[derive(Debug, Default)]
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn publish(&self, _subject: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Publishes `{subject, message}` JSON to a fixed topic endpoint.
pub struct HttpTopicNotifier {
    client: reqwest::Client,
    topic_url: String,
}

impl HttpTopicNotifier {
    pub fn new(topic_url: String) -> Self {
        HttpTopicNotifier {
            client: reqwest::Client::new(),
            topic_url,
        }
    }
}

#[async_trait]
impl Notifier for HttpTopicNotifier {
    async fn publish(&self, subject: &str, message: &str) -> AppResult<()> {
        self.client
            .post(&self.topic_url)
            .json(&json!({ "subject": subject, "message": message }))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| AppError::Notify(err.to_string()))?;
        Ok(())
    }
}
