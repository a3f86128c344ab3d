use crate::domain::{models::booking::{Booking, NewBooking}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("INSERT INTO bookings (full_name, email, phone, check_in_date, check_out_date, num_guests, num_rooms, room_type, special_requests, created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *").bind(&booking.full_name).bind(&booking.email).bind(&booking.phone).bind(&booking.check_in_date).bind(&booking.check_out_date).bind(booking.num_guests).bind(booking.num_rooms).bind(&booking.room_type).bind(&booking.special_requests).bind(booking.created_at).fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_recent(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC, id DESC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE email = $1 ORDER BY created_at DESC, id DESC").bind(email).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM bookings").fetch_one(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.get::<i64, _>("count"))
    }
}
