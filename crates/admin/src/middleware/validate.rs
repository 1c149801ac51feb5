use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::Validate;

/// JSON body that has passed `validator` checks. Malformed bodies and
/// failed checks are both rejected with the `validation_error` envelope.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::validation(format!("Invalid JSON: {}", rejection.body_text()))
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}

pub struct SimpleValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for SimpleValidatedQuery<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                HttpError::validation(format!("Invalid query: {}", rejection.body_text()))
            })?;

        value.validate()?;

        Ok(Self(value))
    }
}
