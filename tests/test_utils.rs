#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use cinebooker::models::user::SignupRequest;
use cinebooker::notify::Notifier;
use cinebooker::utils::error::{AppError, AppResult};
use tokio::sync::Mutex;

/// Notifier that records every published subject.
#[derive(Default)]
pub struct RecordingNotifier {
    subjects: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn subjects(&self) -> Vec<String> {
        self.subjects.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn publish(&self, subject: &str, _message: &str) -> AppResult<()> {
        self.subjects.lock().await.push(subject.to_string());
        Ok(())
    }
}

/// Notifier whose transport always fails.
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn publish(&self, _subject: &str, _message: &str) -> AppResult<()> {
        Err(AppError::Notify("topic unreachable".to_string()))
    }
}

pub fn signup_request(name: &str, email: &str, password: &str, confirm: &str) -> SignupRequest {
    SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: confirm.to_string(),
    }
}
