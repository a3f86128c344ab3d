use std::collections::HashSet;
use std::sync::Arc;
use argon2::{password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString}, Argon2};
use rand::rngs::OsRng;
use tracing::{info, warn};

use crate::domain::models::user::{AuthenticatedUser, Role};
use crate::domain::ports::UserRepository;
use crate::error::AppError;

pub struct AuthService {
    repo: Arc<dyn UserRepository>,
    admin_emails: HashSet<String>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn UserRepository>, admin_emails: HashSet<String>) -> Self {
        Self { repo, admin_emails }
    }

    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<AuthenticatedUser, AppError> {
        let user = self.repo.find_by_email(email).await?
            .ok_or(AppError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::InternalWithMsg(format!("Stored hash for {} is malformed: {}", user.id, e)))?;

        Argon2::default().verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| {
                warn!("Login rejected for {}", user.id);
                AppError::InvalidCredentials
            })?;

        let role = self.role_for(&user.email);
        info!("User logged in: {} ({:?})", user.id, role);

        Ok(AuthenticatedUser { email: user.email, role })
    }

    pub fn role_for(&self, email: &str) -> Role {
        if self.admin_emails.contains(email) { Role::Admin } else { Role::Guest }
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|_| AppError::Internal)
}
