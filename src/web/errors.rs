//! Error types and handling for web handlers

use axum::{
    Json as AxumJson,
    extract::{
        path::ErrorKind,
        rejection::{BytesRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{error::Category, json};
use serde_path_to_error::Segment;
use thiserror::Error;

use crate::core::model_name::ParseModelNameError;

/// Part of the request a validation error points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Path,
    Query,
    Body,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// `keys` locate the offending value inside `location`, outermost first.
    #[error("{message}")]
    Validation {
        location: Location,
        keys: Vec<String>,
        kind: &'static str,
        message: String,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not Found")]
    NotFound,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> serde_json::Value {
        match self {
            ApiError::Validation {
                location,
                keys,
                kind,
                message,
            } => {
                let mut loc = vec![json!(location)];
                loc.extend(keys.iter().map(|key| json!(key)));
                json!([{ "type": kind, "loc": loc, "msg": message }])
            }
            other => json!(other.to_string()),
        }
    }

    /// Convert a failed deserialization of query or body data, keeping the
    /// path to the value that failed.
    pub fn from_deserialize(
        location: Location,
        err: serde_path_to_error::Error<serde_json::Error>,
    ) -> Self {
        let mut keys: Vec<String> = err
            .path()
            .iter()
            .filter_map(|segment| match segment {
                Segment::Seq { index } => Some(index.to_string()),
                Segment::Map { key } => Some(key.clone()),
                Segment::Enum { variant } => Some(variant.clone()),
                Segment::Unknown => None,
            })
            .collect();

        let inner = err.into_inner();
        let message = message_without_position(&inner);

        let (kind, message) = match inner.classify() {
            Category::Syntax | Category::Eof | Category::Io => ("json_invalid", message),
            Category::Data => match missing_field(&message) {
                Some(field) => {
                    keys.push(field.to_string());
                    ("missing", "Field required".to_string())
                }
                None => ("value_error", message),
            },
        };

        ApiError::Validation {
            location,
            keys,
            kind,
            message,
        }
    }
}

/// `serde_json` appends the input position to its messages when parsing text.
fn message_without_position(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match err.line() {
        0 => message,
        _ => message
            .strip_suffix(&suffix)
            .map(str::to_string)
            .unwrap_or(message),
    }
}

fn missing_field(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.strip_suffix('`'))
}

/// Error kind and message for a value that failed to parse as `expected_type`.
fn describe_parse_failure(expected_type: &str) -> (&'static str, String) {
    match expected_type {
        "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
        | "u128" | "usize" => (
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer".to_string(),
        ),
        "f32" | "f64" => (
            "float_parsing",
            "Input should be a valid number, unable to parse string as a number".to_string(),
        ),
        "bool" => (
            "bool_parsing",
            "Input should be a valid boolean, unable to interpret input".to_string(),
        ),
        other => ("value_error", format!("Input should be a valid {other}")),
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                let (key, kind, message) = match err.kind() {
                    ErrorKind::ParseErrorAtKey {
                        key, expected_type, ..
                    } => {
                        let (kind, message) = describe_parse_failure(expected_type);
                        (Some(key.clone()), kind, message)
                    }
                    ErrorKind::ParseError { expected_type, .. }
                    | ErrorKind::ParseErrorAtIndex { expected_type, .. } => {
                        let (kind, message) = describe_parse_failure(expected_type);
                        (None, kind, message)
                    }
                    ErrorKind::InvalidUtf8InPathParam { key } => (
                        Some(key.clone()),
                        "string_unicode",
                        "Input should be a valid string, unable to parse raw data as a unicode string"
                            .to_string(),
                    ),
                    _ => (None, "value_error", err.body_text()),
                };

                ApiError::Validation {
                    location: Location::Path,
                    keys: key.into_iter().collect(),
                    kind,
                    message,
                }
            }
            other => ApiError::Internal(other.body_text()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ParseModelNameError> for ApiError {
    fn from(err: ParseModelNameError) -> Self {
        ApiError::Validation {
            location: Location::Path,
            keys: vec!["model_name".to_string()],
            kind: "enum",
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        match &self {
            ApiError::Internal(message) => tracing::error!(%message, "request failed"),
            ApiError::Validation { .. } => tracing::debug!(error = %self, "request rejected"),
            _ => {}
        }

        let body = AxumJson(json!({ "detail": self.detail() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::Value;

    fn validation(field: Option<&str>) -> ApiError {
        ApiError::Validation {
            location: Location::Path,
            keys: field.into_iter().map(str::to_string).collect(),
            kind: "int_parsing",
            message: "Input should be a valid integer".to_string(),
        }
    }

    async fn body_json(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_validation_status_code() {
        assert_eq!(
            validation(None).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_not_found_status_code() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_method_not_allowed_status_code() {
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_bad_request_status_code() {
        let error = ApiError::BadRequest("Missing content".to_string());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_status_code() {
        let error = ApiError::Internal("Something went wrong".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_describe_parse_failure() {
        assert_eq!(describe_parse_failure("i64").0, "int_parsing");
        assert_eq!(describe_parse_failure("f64").0, "float_parsing");
        assert_eq!(describe_parse_failure("bool").0, "bool_parsing");

        let (kind, message) = describe_parse_failure("Uuid");
        assert_eq!(kind, "value_error");
        assert_eq!(message, "Input should be a valid Uuid");
    }

    #[test]
    fn test_model_name_error_points_at_path() {
        let error = ApiError::from(ParseModelNameError("VGG".to_string()));
        let ApiError::Validation {
            location, keys, kind, ..
        } = &error
        else {
            panic!("Expected validation error");
        };
        assert_eq!(*location, Location::Path);
        assert_eq!(keys, &vec!["model_name".to_string()]);
        assert_eq!(*kind, "enum");
    }

    fn body_error(input: &str) -> ApiError {
        let mut deserializer = serde_json::Deserializer::from_str(input);
        let err = serde_path_to_error::deserialize::<_, crate::core::item::Item>(&mut deserializer)
            .unwrap_err();
        ApiError::from_deserialize(Location::Body, err)
    }

    fn unpack(error: ApiError) -> (Location, Vec<String>, &'static str, String) {
        let ApiError::Validation {
            location,
            keys,
            kind,
            message,
        } = error
        else {
            panic!("Expected validation error");
        };
        (location, keys, kind, message)
    }

    #[test]
    fn test_missing_body_field_is_located() {
        let (location, keys, kind, message) = unpack(body_error(r#"{"name": "Foo"}"#));
        assert_eq!(location, Location::Body);
        assert_eq!(keys, vec!["price".to_string()]);
        assert_eq!(kind, "missing");
        assert_eq!(message, "Field required");
    }

    #[test]
    fn test_invalid_body_value_is_located() {
        let (_, keys, kind, message) = unpack(body_error(r#"{"name": "Foo", "price": true}"#));
        assert_eq!(keys, vec!["price".to_string()]);
        assert_eq!(kind, "value_error");
        assert!(!message.contains(" at line "), "{message}");
    }

    #[test]
    fn test_malformed_body_is_json_invalid() {
        let (_, keys, kind, _) = unpack(body_error(r#"{"name": "#));
        assert!(keys.is_empty());
        assert_eq!(kind, "json_invalid");
    }

    #[test]
    fn test_query_error_keeps_key() {
        let err = serde_path_to_error::deserialize::<_, crate::web::params::ItemQuery>(
            json!({"short": "maybe"}),
        )
        .unwrap_err();
        let (location, keys, _, message) = unpack(ApiError::from_deserialize(Location::Query, err));
        assert_eq!(location, Location::Query);
        assert_eq!(keys, vec!["short".to_string()]);
        assert!(message.starts_with("Input should be a valid boolean"), "{message}");
    }

    #[tokio::test]
    async fn test_validation_body_lists_location() {
        let (status, body) = body_json(validation(Some("user_id"))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"][0]["loc"], json!(["path", "user_id"]));
        assert_eq!(body["detail"][0]["type"], json!("int_parsing"));
        assert_eq!(
            body["detail"][0]["msg"],
            json!("Input should be a valid integer")
        );
    }

    #[tokio::test]
    async fn test_validation_body_without_field() {
        let (_, body) = body_json(validation(None)).await;
        assert_eq!(body["detail"][0]["loc"], json!(["path"]));
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let (status, body) = body_json(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Not Found"}));
    }
}
