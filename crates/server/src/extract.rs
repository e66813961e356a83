//! Request input that arrives either as a JSON body or as query parameters.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use service::errors::ServiceError;

use crate::errors::ApiError;

/// Create/update payload. A request with `Content-Type: application/json`
/// is read from the body; anything else is read from the query string
/// (`POST /teachers/?first_name=Ann&last_name=Lee&years_of_experience=5`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Input<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

#[async_trait]
impl<T, S> FromRequest<S> for Input<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(req.headers()) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(value));
        }

        let (mut parts, _body) = req.into_parts();
        let Query(value) = Query::<T>::from_request_parts(&mut parts, state)
            .await
            // missing or mistyped parameters are a validation failure, like a bad JSON body
            .map_err(|e| ApiError(ServiceError::Validation(e.body_text())).into_response())?;
        Ok(Self(value))
    }
}
