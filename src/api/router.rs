use axum::{
    body::Body,
    extract::Request,
    routing::{get, get_service, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, health};
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    let public_dir = Path::new(&state.config.public_dir);

    Router::new()
        .route("/health", get(health::health_check))

        // Pages
        .route("/", get_service(ServeFile::new(public_dir.join("index.html"))))
        .route("/booking", get_service(ServeFile::new(public_dir.join("booking.html"))))
        .route("/login", get_service(ServeFile::new(public_dir.join("login.html"))).post(auth::login))

        // Bookings
        .route("/api/booking", post(booking::submit_booking))
        .route("/api/bookings", get(booking::list_bookings))
        .route("/api/admin/bookings", get(booking::list_admin_bookings))
        .route("/api/guest/bookings", get(booking::list_guest_bookings))

        .fallback_service(ServeDir::new(public_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
