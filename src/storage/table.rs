use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::models::booking::Booking;
use crate::models::user::User;
use crate::storage::{BookingStore, UserStore};
use crate::utils::error::{AppError, AppResult};

/// Client for a managed key-value table service.
///
/// Users live in a `Users` table keyed by email, bookings in a `Bookings`
/// table keyed by a UUID assigned at creation. Items are stored and fetched
/// as JSON; a missing item is a 404.
pub struct TableStore {
    client: reqwest::Client,
    endpoint: String,
}

impl TableStore {
    pub fn new(endpoint: String) -> Self {
        TableStore {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    fn item_url(&self, table: &str, key: &str) -> String {
        format!("{}/tables/{}/items/{}", self.endpoint, table, key)
    }
}

#[async_trait]
impl UserStore for TableStore {
    async fn create(&self, user: User) -> AppResult<()> {
        if self.get_by_email(&user.email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        self.client
            .put(self.item_url("Users", &user.email))
            .json(&user)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let response = self.client.get(self.item_url("Users", email)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let user = response.error_for_status()?.json::<User>().await?;
        Ok(Some(user))
    }
}

#[async_trait]
impl BookingStore for TableStore {
    async fn next_id(&self) -> AppResult<String> {
        Ok(Uuid::new_v4().to_string())
    }

    async fn append(&self, booking: Booking) -> AppResult<()> {
        self.client
            .put(self.item_url("Bookings", &booking.id))
            .json(&booking)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
