use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::error::WebError;

/// JSON body extractor that reports missing fields and malformed payloads
/// as a 400 with the shared `{"error": ...}` body instead of axum's 422.
pub struct AppJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
        }
    }
}
