use async_trait::async_trait;

use crate::models::booking::Booking;
use crate::models::user::User;
use crate::utils::error::AppResult;

pub mod memory;
pub mod table;

/// Account storage keyed by email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Store a new user. Fails with `DuplicateEmail` if the email is taken;
    /// the uniqueness check lives behind this contract, not in callers.
    async fn create(&self, user: User) -> AppResult<()>;

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// Append-only booking storage.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Reserve the identifier for the next booking.
    async fn next_id(&self) -> AppResult<String>;

    async fn append(&self, booking: Booking) -> AppResult<()>;
}
