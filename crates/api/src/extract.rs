//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every failure reaches the client as a JSON
//! `{"error": ..., "code": ...}` body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use leaflink_core::error::CoreError;
use leaflink_core::types::DbId;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// A JSON body that has been deserialized and then validated.
///
/// Syntax errors, type mismatches, missing fields, and a wrong
/// `Content-Type` all become 400 `BAD_REQUEST`; failed `Validate` rules
/// become 400 `VALIDATION_ERROR`.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate().map_err(CoreError::from)?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment parsed as a [`DbId`].
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        raw.parse::<DbId>()
            .map(Self)
            .map_err(|_| AppError::BadRequest(format!("Invalid id '{raw}': expected an integer")))
    }
}
