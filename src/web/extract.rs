//! Extractors that reject with [`ApiError`] instead of plain-text bodies

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::web::errors::{ApiError, Location};

#[derive(Debug, axum_macros::FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ValidPath<T>(pub T);

/// Query string decoded into `T`. A repeated key keeps its last value.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

/// JSON body decoded into `T` whether or not a content type was sent.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;

        let params: Map<String, Value> = pairs
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        serde_path_to_error::deserialize(Value::Object(params))
            .map(ValidQuery)
            .map_err(|err| ApiError::from_deserialize(Location::Query, err))
    }
}

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let value = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|err| ApiError::from_deserialize(Location::Body, err))?;
        deserializer.end().map_err(|err| ApiError::Validation {
            location: Location::Body,
            keys: Vec::new(),
            kind: "json_invalid",
            message: err.to_string(),
        })?;

        Ok(ValidJson(value))
    }
}
