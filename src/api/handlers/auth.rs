use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::error::AppError;
use crate::api::dtos::requests::LoginRequest;
use crate::api::extractors::json_or_form::JsonOrForm;
use std::sync::Arc;

/// Credential check only: answers `{email, role}` and issues no session, so
/// callers re-authenticate for every privileged action.
pub async fn login(
    State(state): State<Arc<AppState>>,
    JsonOrForm(payload): JsonOrForm<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.auth_service.authenticate(&payload.email, &payload.password).await?;
    Ok(Json(user))
}
