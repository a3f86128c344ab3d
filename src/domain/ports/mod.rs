use crate::domain::models::{booking::{Booking, NewBooking}, user::User};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError>;
    /// Newest first.
    async fn list_recent(&self) -> Result<Vec<Booking>, AppError>;
    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}
