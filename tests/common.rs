use guesthouse_backend::{
    api::router::create_router,
    state::AppState,
    config::{Config, parse_admin_emails},
    domain::models::user::User,
    domain::ports::{BookingRepository, UserRepository},
    domain::services::auth_service::hash_password,
    infra::factory::load_templates,
    infra::repositories::{sqlite_booking_repo::SqliteBookingRepo, sqlite_user_repo::SqliteUserRepo},
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use std::str::FromStr;
use tower::ServiceExt;
use serde_json::Value;

pub const ADMIN_EMAIL: &str = "admin@guest.com";
pub const ADMIN_PASSWORD: &str = "admin123";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub booking_repo: Arc<dyn BookingRepository>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            public_dir: "public".to_string(),
            db_max_connections: 1,
            admin_emails: parse_admin_emails(ADMIN_EMAIL),
            admin_seed_password: None,
        };

        let booking_repo: Arc<dyn BookingRepository> = Arc::new(SqliteBookingRepo::new(pool.clone()));
        let state = Arc::new(AppState::new(
            config,
            booking_repo.clone(),
            Arc::new(SqliteUserRepo::new(pool.clone())),
            Arc::new(load_templates()),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            booking_repo,
        }
    }

    pub async fn add_user(&self, email: &str, password: &str) {
        let user = User::new(email.to_string(), hash_password(password).unwrap());
        self.state.user_repo.create(&user).await.unwrap();
    }

    pub async fn booking_count(&self) -> i64 {
        self.booking_repo.count().await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_raw(&self, uri: &str, content_type: Option<&str>, body: &str) -> Response {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        self.router.clone().oneshot(builder.body(Body::from(body.to_string())).unwrap()).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[allow(dead_code)]
pub fn sample_booking() -> Value {
    serde_json::json!({
        "fullName": "Jo Lee",
        "email": "jo@x.com",
        "phone": "555",
        "checkInDate": "2024-06-01",
        "checkOutDate": "2024-06-03",
        "numGuests": 2,
        "numRooms": 1
    })
}
