//! Extractors that report malformed input as a 422 `{"detail": ...}` body
//! instead of axum's plain-text rejections.

use std::collections::BTreeMap;

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, uri::InvalidUri, Uri},
    Json,
};
use creamery_core::CatalogError;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::AppError;

fn invalid(detail: String) -> AppError {
    AppError::Catalog(CatalogError::InvalidInput(detail))
}

/// Path parameters.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(v)| Self(v))
            .map_err(|e| invalid(e.body_text()))
    }
}

/// Query string parameters. Unknown parameters are ignored and a repeated
/// parameter takes its last value.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts.uri.query().unwrap_or_default();
        let last: BTreeMap<String, String> = form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &last {
            ser.append_pair(k, v);
        }
        let query = ser.finish();
        let uri: Uri = format!("/?{query}")
            .parse()
            .map_err(|e: InvalidUri| invalid(e.to_string()))?;

        Query::<T>::try_from_uri(&uri)
            .map(|Query(v)| Self(v))
            .map_err(|e| invalid(e.body_text()))
    }
}

/// JSON request body.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(v)| Self(v))
            .map_err(|e| invalid(e.body_text()))
    }
}
