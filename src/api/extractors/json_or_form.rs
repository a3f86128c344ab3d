use axum::{
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use crate::error::AppError;

/// Accepts either a JSON body or an urlencoded HTML form body, picked by
/// `Content-Type`. Anything that is not JSON is treated as a form post.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<T>::from_request(req, state).await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(JsonOrForm(payload))
        } else {
            let Form(payload) = Form::<T>::from_request(req, state).await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(JsonOrForm(payload))
        }
    }
}
