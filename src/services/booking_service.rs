use std::sync::Arc;

use chrono::Local;

use crate::models::booking::{Booking, TicketRequest};
use crate::notify::{self, Notifier};
use crate::storage::BookingStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::session::SessionUser;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct BookingService {
    store: Arc<dyn BookingStore>,
    notifier: Arc<dyn Notifier>,
}

impl BookingService {
    pub fn new(store: Arc<dyn BookingStore>, notifier: Arc<dyn Notifier>) -> Self {
        BookingService { store, notifier }
    }

    // Persist a booking for the authenticated user
    pub async fn book(&self, user: &SessionUser, request: TicketRequest) -> AppResult<Booking> {
        if request.seats.is_empty() {
            return Err(AppError::NoSeatsSelected);
        }

        // Total price is always recomputed here, never trusted from the form.
        let total_price = request.price * request.seats.len() as f64;
        let id = self.store.next_id().await?;

        let booking = Booking {
            id,
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            movie_name: request.movie_name,
            theater: request.theater,
            address: request.address,
            showtime: request.showtime,
            seats: request.seats,
            price_per_ticket: request.price,
            total_price,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        self.store.append(booking.clone()).await?;

        notify::dispatch(
            self.notifier.as_ref(),
            "Ticket Booked Successfully",
            &format!(
                "User {} has booked {} tickets of {} at {}, {}.\n\n\
                 Movie Name: {}\nTheatre: {}\nAddress: {}\nShow Time: {}\nTotal Price: {}",
                booking.user_email,
                booking.seats.len(),
                booking.movie_name,
                booking.theater,
                booking.address,
                booking.movie_name,
                booking.theater,
                booking.address,
                booking.showtime,
                booking.total_price,
            ),
        )
        .await;

        Ok(booking)
    }
}
