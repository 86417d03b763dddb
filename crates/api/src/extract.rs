//! Request extractors shared by the handler modules.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use homedash_core::validation::flatten_issues;

use crate::error::AppError;

/// JSON body extractor that also runs the DTO's `validator` rules.
///
/// Deserialization failures (malformed JSON, wrong field types, unknown
/// enum values) become a 400 with the serde message; rule violations
/// become a 400 carrying the field-level issue list. Handlers using this
/// extractor never see an invalid payload.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(flatten_issues(&errors)))?;

        Ok(Self(value))
    }
}
