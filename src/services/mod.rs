pub mod booking_service;
pub mod user_service;
