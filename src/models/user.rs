use rocket::FromForm;
use serde::{Deserialize, Serialize};

/// A stored account record. `password_hash` is a bcrypt hash; the raw
/// password never reaches storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

/// Public fields of an authenticated user, safe to hand to views.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

#[derive(Debug, FromForm)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, FromForm)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
