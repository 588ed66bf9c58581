use thiserror::Error;

/// Application error kinds. The display strings double as the user-facing
/// messages flashed at the route boundary, so unknown-email and
/// wrong-password logins are indistinguishable by construction.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Movie not found")]
    MovieNotFound,

    #[error("Please select at least one seat")]
    NoSeatsSelected,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notify(String),
}

// Table-store transport failures are storage errors; the notifier maps its
// own transport errors explicitly.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
