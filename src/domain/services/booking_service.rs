use std::sync::Arc;
use chrono::Utc;
use tracing::info;

use crate::domain::models::booking::{Booking, BookingSubmission, CountInput, NewBooking};
use crate::domain::ports::BookingRepository;
use crate::error::AppError;

pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Validates the payload and stores it as a new booking. Resubmitting the
    /// same payload stores a second, independent row.
    pub async fn submit(&self, submission: BookingSubmission) -> Result<Booking, AppError> {
        let new_booking = validate_submission(submission)?;
        let created = self.repo.create(&new_booking).await?;
        info!("Booking saved: {} for {}", created.id, created.email);
        Ok(created)
    }
}

pub fn validate_submission(submission: BookingSubmission) -> Result<NewBooking, AppError> {
    let full_name = required_text(submission.full_name, "fullName")?;
    let email = required_text(submission.email, "email")?;
    let phone = required_text(submission.phone, "phone")?;
    let check_in_date = required_text(submission.check_in_date, "checkInDate")?;
    let check_out_date = required_text(submission.check_out_date, "checkOutDate")?;
    let num_guests = required_count(submission.num_guests, "numGuests")?;
    let num_rooms = required_count(submission.num_rooms, "numRooms")?;

    Ok(NewBooking {
        full_name,
        email,
        phone,
        check_in_date,
        check_out_date,
        num_guests,
        num_rooms,
        room_type: optional_text(submission.room_type),
        special_requests: optional_text(submission.special_requests),
        created_at: Utc::now(),
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn required_count(value: Option<CountInput>, field: &str) -> Result<i64, AppError> {
    match value {
        Some(CountInput::Number(n)) => Ok(n),
        Some(CountInput::Text(t)) if !t.trim().is_empty() => t.trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation(format!("{} must be a whole number", field))),
        _ => Err(missing(field)),
    }
}

fn missing(field: &str) -> AppError {
    AppError::Validation(format!("Please fill all required fields ({} is missing)", field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::test_support::InMemoryBookingRepo;

    fn valid_submission() -> BookingSubmission {
        BookingSubmission {
            full_name: Some("Jo Lee".into()),
            email: Some("jo@x.com".into()),
            phone: Some("555".into()),
            check_in_date: Some("2024-06-01".into()),
            check_out_date: Some("2024-06-03".into()),
            num_guests: Some(CountInput::Number(2)),
            num_rooms: Some(CountInput::Text("1".into())),
            room_type: None,
            special_requests: Some("".into()),
        }
    }

    #[test]
    fn accepts_numbers_sent_as_text() {
        let booking = validate_submission(valid_submission()).unwrap();
        assert_eq!(booking.num_guests, 2);
        assert_eq!(booking.num_rooms, 1);
        assert_eq!(booking.special_requests, None);
    }

    #[test]
    fn rejects_each_missing_required_field() {
        let strip: [fn(&mut BookingSubmission); 7] = [
            |s| s.full_name = None,
            |s| s.email = Some("   ".into()),
            |s| s.phone = None,
            |s| s.check_in_date = Some("".into()),
            |s| s.check_out_date = None,
            |s| s.num_guests = None,
            |s| s.num_rooms = Some(CountInput::Text("".into())),
        ];

        for f in strip {
            let mut submission = valid_submission();
            f(&mut submission);
            assert!(matches!(validate_submission(submission), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn rejects_non_numeric_counts() {
        let mut submission = valid_submission();
        submission.num_guests = Some(CountInput::Text("two".into()));
        let err = validate_submission(submission).unwrap_err();
        assert_eq!(err.public_message(), "numGuests must be a whole number");
    }

    #[tokio::test]
    async fn invalid_submission_does_not_touch_store() {
        let repo = Arc::new(InMemoryBookingRepo::default());
        let service = BookingService::new(repo.clone());

        let mut submission = valid_submission();
        submission.phone = None;
        assert!(service.submit(submission).await.is_err());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn resubmission_creates_duplicate() {
        let repo = Arc::new(InMemoryBookingRepo::default());
        let service = BookingService::new(repo.clone());

        let first = service.submit(valid_submission()).await.unwrap();
        let second = service.submit(valid_submission()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
