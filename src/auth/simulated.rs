// src/auth/simulated.rs
//
// Stand-in for a real identity provider: credentials are checked for shape
// only, and every request resolves after a fixed delay unless cancelled.

use chrono::Utc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::auth::token::generate_user_id;
use crate::auth::user::{User, UserType};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Sign-in was cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// How long each simulated request takes.
    pub delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

impl LoginRequest {
    pub fn from_params(params: &[(String, String)]) -> Self {
        let mut req = LoginRequest::default();
        for (k, v) in params {
            match k.as_str() {
                "email" => req.email = v.clone(),
                "password" => req.password = v.clone(),
                "user_type" => req.user_type = UserType::parse(v),
                _ => {}
            }
        }
        req
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: UserType,
}

impl RegisterRequest {
    pub fn from_params(params: &[(String, String)]) -> Self {
        let mut req = RegisterRequest::default();
        for (k, v) in params {
            match k.as_str() {
                "name" => req.name = v.clone(),
                "email" => req.email = v.clone(),
                "password" => req.password = v.clone(),
                "confirm_password" => req.confirm_password = v.clone(),
                "user_type" => req.user_type = UserType::parse(v),
                _ => {}
            }
        }
        req
    }
}

pub struct SimulatedAuth {
    cfg: AuthConfig,
}

impl SimulatedAuth {
    pub fn new(cfg: AuthConfig) -> Self {
        Self { cfg }
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, AuthError> {
        let e = email.trim().to_lowercase();
        if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
            return Err(AuthError::InvalidEmail);
        }
        Ok(e)
    }

    /// Sign in with any well-formed email and non-empty password.
    /// The user's name is the local part of the email.
    pub async fn login(
        &self,
        req: &LoginRequest,
        cancel: &CancellationToken,
    ) -> Result<User, AuthError> {
        if req.email.trim().is_empty() || req.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        let email = Self::normalize_email(&req.email)?;

        self.wait(cancel).await?;

        let name = email.split('@').next().unwrap_or_default().to_string();
        Ok(new_user(name, email, req.user_type))
    }

    pub async fn register(
        &self,
        req: &RegisterRequest,
        cancel: &CancellationToken,
    ) -> Result<User, AuthError> {
        let fields = [&req.name, &req.email, &req.password, &req.confirm_password];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(AuthError::MissingFields);
        }
        if req.password != req.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if req.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        let email = Self::normalize_email(&req.email)?;

        self.wait(cancel).await?;

        Ok(new_user(req.name.trim().to_string(), email, req.user_type))
    }

    async fn wait(&self, cancel: &CancellationToken) -> Result<(), AuthError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::info!("simulated auth cancelled");
                Err(AuthError::Cancelled)
            }
            _ = tokio::time::sleep(self.cfg.delay) => Ok(()),
        }
    }
}

fn new_user(name: String, email: String, user_type: UserType) -> User {
    User {
        id: generate_user_id(&mut rand::thread_rng()),
        name,
        email,
        user_type,
        created_at: Utc::now(),
    }
}
