use rocket::FromForm;
use serde::{Deserialize, Serialize};

/// A confirmed ticket booking. Movie and user details are denormalized
/// copies taken at booking time; the record never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub user_name: String,
    pub user_email: String,
    pub movie_name: String,
    pub theater: String,
    pub address: String,
    pub showtime: String,
    pub seats: Vec<String>,
    pub price_per_ticket: f64,
    pub total_price: f64,
    pub timestamp: String,
}

/// Seat-selection form posted from the booking page. `total_price` is not a
/// field on purpose; it is always recomputed server-side.
#[derive(Debug, FromForm)]
pub struct TicketRequest {
    pub movie_name: String,
    pub theater: String,
    pub address: String,
    pub showtime: String,
    pub seats: Vec<String>,
    pub price: f64,
}
