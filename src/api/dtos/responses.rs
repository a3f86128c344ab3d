use serde::Serialize;
use crate::domain::models::booking::Booking;

#[derive(Serialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub count: usize,
    pub bookings: Vec<Booking>,
}

#[derive(Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub message: String,
}
