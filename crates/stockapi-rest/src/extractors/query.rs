//! Query string extractor with enveloped errors.
//!
//! Axum's own `Query` rejects malformed input with a plain-text body. This
//! wrapper turns the rejection into a 400 carrying the usual error envelope.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use stockapi_core::StockApiError;

/// Query extractor whose rejection is an [`AppError`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T> std::ops::Deref for ApiQuery<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError(StockApiError::validation(format!(
                    "Invalid query: {}",
                    rejection.body_text()
                )))
            })?;

        Ok(ApiQuery(value))
    }
}
