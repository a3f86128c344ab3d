use std::sync::Arc;

use crate::domain::models::booking::Booking;
use crate::domain::ports::BookingRepository;
use crate::error::AppError;

pub struct QueryService {
    repo: Arc<dyn BookingRepository>,
}

impl QueryService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<Booking>, AppError> {
        self.repo.list_recent().await
    }

    /// Exact, case-sensitive match. A missing or empty email matches nothing.
    pub async fn list_by_email(&self, email: Option<&str>) -> Result<Vec<Booking>, AppError> {
        match email {
            Some(e) if !e.is_empty() => self.repo.list_by_email(e).await,
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::test_support::{new_booking, InMemoryBookingRepo};

    #[tokio::test]
    async fn missing_email_returns_nothing() {
        let repo = Arc::new(InMemoryBookingRepo::default());
        repo.create(&new_booking("jo@x.com")).await.unwrap();
        let service = QueryService::new(repo);

        assert!(service.list_by_email(None).await.unwrap().is_empty());
        assert!(service.list_by_email(Some("")).await.unwrap().is_empty());
        assert_eq!(service.list_by_email(Some("jo@x.com")).await.unwrap().len(), 1);
    }
}
