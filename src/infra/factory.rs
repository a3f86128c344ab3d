use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::{info, warn};
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::models::user::User;
use crate::domain::services::auth_service::hash_password;
use crate::error::AppError;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_user_repo::PostgresUserRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_user_repo::SqliteUserRepo,
};

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template("booking_confirmed.html", include_str!("../../templates/booking_confirmed.html"))
        .expect("Failed to load confirmation template");
    tera.add_raw_template("booking_failed.html", include_str!("../../templates/booking_failed.html"))
        .expect("Failed to load failure template");
    tera
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let templates = Arc::new(load_templates());

    let state = if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState::new(
            config.clone(),
            Arc::new(PostgresBookingRepo::new(pool.clone())),
            Arc::new(PostgresUserRepo::new(pool)),
            templates,
        )
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState::new(
            config.clone(),
            Arc::new(SqliteBookingRepo::new(pool.clone())),
            Arc::new(SqliteUserRepo::new(pool)),
            templates,
        )
    };

    if let Some(password) = &config.admin_seed_password
        && let Err(e) = seed_admin_users(&state, password).await {
        warn!("Admin seeding failed: {}", e);
    }

    state
}

/// Creates a user row for every configured admin email that has none yet.
/// Existing rows are left untouched.
pub async fn seed_admin_users(state: &AppState, password: &str) -> Result<usize, AppError> {
    let mut created = 0;
    for email in &state.config.admin_emails {
        if state.user_repo.find_by_email(email).await?.is_some() {
            continue;
        }
        let user = User::new(email.clone(), hash_password(password)?);
        state.user_repo.create(&user).await?;
        info!("Seeded admin user: {}", email);
        created += 1;
    }
    Ok(created)
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
