//! Custom Axum extractors
//!
//! Both wrap a stock extractor and turn its rejection into an [`ApiError`]
//! so clients always get the JSON envelope.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body. Unparseable bodies or a missing JSON content type are 400;
/// well-formed JSON of the wrong shape is 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => {
                tracing::debug!("json body has wrong shape: {}", e);
                Err(ApiError::Unprocessable)
            }
            Err(e) => {
                tracing::debug!("json body rejected: {}", e);
                Err(ApiError::BadRequest)
            }
        }
    }
}

/// Integer category id from the path. Anything else is treated like an
/// unmatched route (404), not a validation error.
pub struct CategoryId(pub i32);

impl<S> FromRequestParts<S> for CategoryId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i32> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        Ok(Self(id))
    }
}
