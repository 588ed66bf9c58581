use std::sync::Arc;

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::models::user::{SignupRequest, User, UserProfile};
use crate::notify::{self, Notifier};
use crate::storage::UserStore;
use crate::utils::error::{AppError, AppResult};

pub struct UserService {
    store: Arc<dyn UserStore>,
    notifier: Arc<dyn Notifier>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, notifier: Arc<dyn Notifier>) -> Self {
        UserService { store, notifier }
    }

    // Register a new user
    pub async fn register(&self, request: SignupRequest) -> AppResult<()> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(AppError::MissingFields);
        }

        if request.password != request.confirm_password {
            return Err(AppError::PasswordMismatch);
        }

        // Hash password; the store rejects duplicate emails.
        let password_hash = hash(request.password.as_bytes(), DEFAULT_COST)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        self.store
            .create(User {
                email: request.email.clone(),
                name: request.name,
                password_hash,
            })
            .await?;

        notify::dispatch(
            self.notifier.as_ref(),
            "New User Signup",
            &format!("User {} has signed up.", request.email),
        )
        .await;

        Ok(())
    }

    // Log in an existing user
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        let user = self
            .store
            .get_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_matches =
            verify(password.as_bytes(), &user.password_hash).map_err(|_| AppError::InvalidCredentials)?;
        if !password_matches {
            return Err(AppError::InvalidCredentials);
        }

        notify::dispatch(
            self.notifier.as_ref(),
            "User Login",
            &format!("User {} has logged in.", user.email),
        )
        .await;

        Ok(UserProfile {
            name: user.name,
            email: user.email,
        })
    }
}
