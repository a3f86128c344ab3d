use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct GuestBookingsQuery {
    pub email: Option<String>,
}
