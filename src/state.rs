use std::sync::Arc;
use crate::domain::ports::{BookingRepository, UserRepository};
use crate::domain::services::{
    auth_service::AuthService, booking_service::BookingService, query_service::QueryService,
};
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub booking_service: Arc<BookingService>,
    pub query_service: Arc<QueryService>,
    pub auth_service: Arc<AuthService>,
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Wires the services on top of whichever store backend was selected.
    pub fn new(
        config: Config,
        booking_repo: Arc<dyn BookingRepository>,
        user_repo: Arc<dyn UserRepository>,
        templates: Arc<Tera>,
    ) -> Self {
        let booking_service = Arc::new(BookingService::new(booking_repo.clone()));
        let query_service = Arc::new(QueryService::new(booking_repo));
        let auth_service = Arc::new(AuthService::new(user_repo.clone(), config.admin_emails.clone()));

        Self {
            config,
            user_repo,
            booking_service,
            query_service,
            auth_service,
            templates,
        }
    }
}
