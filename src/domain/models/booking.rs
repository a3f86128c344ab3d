use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub num_guests: i64,
    pub num_rooms: i64,
    pub room_type: Option<String>,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A count field as it arrives over the wire: JSON clients send numbers,
/// HTML forms send text.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum CountInput {
    Number(i64),
    Text(String),
}

/// Raw booking payload. Every field is optional here so that a missing field
/// surfaces as a validation error instead of a deserialization rejection.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub check_in_date: Option<String>,
    pub check_out_date: Option<String>,
    pub num_guests: Option<CountInput>,
    pub num_rooms: Option<CountInput>,
    pub room_type: Option<String>,
    pub special_requests: Option<String>,
}

/// A submission that passed validation and is ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub num_guests: i64,
    pub num_rooms: i64,
    pub room_type: Option<String>,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
}
