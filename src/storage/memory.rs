use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::booking::Booking;
use crate::models::user::User;
use crate::storage::{BookingStore, UserStore};
use crate::utils::error::{AppError, AppResult};

/// Process-local storage with no persistence across restarts.
///
/// The user map and booking list sit behind mutexes and the id counter is
/// atomic, so concurrent signups and bookings cannot race the uniqueness
/// check or the id sequence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, User>>,
    bookings: Mutex<Vec<Booking>>,
    counter: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Snapshot of all bookings, oldest first.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.lock().await.clone()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create(&self, user: User) -> AppResult<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.email) {
            return Err(AppError::DuplicateEmail);
        }
        users.insert(user.email.clone(), user);
        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().await.get(email).cloned())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn next_id(&self) -> AppResult<String> {
        // Ids start at 1 and increase monotonically.
        Ok((self.counter.fetch_add(1, Ordering::SeqCst) + 1).to_string())
    }

    async fn append(&self, booking: Booking) -> AppResult<()> {
        self.bookings.lock().await.push(booking);
        Ok(())
    }
}
