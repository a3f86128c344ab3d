use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use crate::state::AppState;
use crate::api::dtos::requests::GuestBookingsQuery;
use crate::api::dtos::responses::{BookingListResponse, FailureResponse};
use crate::api::extractors::json_or_form::JsonOrForm;
use crate::domain::models::booking::BookingSubmission;
use crate::error::AppError;
use std::sync::Arc;
use tera::Context;
use tracing::{debug, error, info, warn};

pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<JsonOrForm<BookingSubmission>, AppError>,
) -> Response {
    let result = match payload {
        Ok(JsonOrForm(submission)) => {
            debug!("Received booking: {:?}", submission);
            state.booking_service.submit(submission).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(booking) => {
            let mut ctx = Context::new();
            ctx.insert("booking", &booking);
            render_page(&state, "booking_confirmed.html", &ctx, StatusCode::OK)
        }
        Err(e) => {
            let status = e.status();
            let (title, heading, message) = match &e {
                AppError::Validation(_) => {
                    warn!("Booking rejected: {}", e);
                    ("Booking Error", "Booking Failed", e.public_message())
                }
                _ => {
                    e.log();
                    ("Database Error", "Server Error", "Failed to save booking. Please try again.".to_string())
                }
            };

            let mut ctx = Context::new();
            ctx.insert("title", title);
            ctx.insert("heading", heading);
            ctx.insert("message", &message);
            render_page(&state, "booking_failed.html", &ctx, status)
        }
    }
}

fn render_page(state: &AppState, template: &str, ctx: &Context, status: StatusCode) -> Response {
    match state.templates.render(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Template rendering failed for {}: {:?}", template, e);
            AppError::Internal.into_response()
        }
    }
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.query_service.list_all().await {
        Ok(bookings) => Json(BookingListResponse {
            success: true,
            count: bookings.len(),
            bookings,
        }).into_response(),
        Err(e) => {
            e.log();
            let message = e.public_message();
            (e.status(), Json(FailureResponse { success: false, message })).into_response()
        }
    }
}

pub async fn list_admin_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.query_service.list_all().await?;
    Ok(Json(bookings))
}

pub async fn list_guest_bookings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GuestBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.query_service.list_by_email(params.email.as_deref()).await?;
    info!("Guest bookings lookup returned {} rows", bookings.len());
    Ok(Json(bookings))
}
