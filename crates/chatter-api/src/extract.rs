use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::ApiError;

/// `{id}` path segment. Anything that isn't a non-negative integer is treated
/// as an unknown route.
#[derive(Debug, Clone, Copy)]
pub struct MessageId(pub u64);

impl<S> FromRequestParts<S> for MessageId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<u64>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!("Unroutable message id in {}: {}", parts.uri.path(), e);
                ApiError::NotFound
            })?;
        Ok(MessageId(id))
    }
}

/// JSON request body that must be a non-empty object before it is decoded
/// into `T`. Every failure (missing body, wrong content type, malformed JSON,
/// wrong shape) is a bad request.
#[derive(Debug)]
pub struct JsonObject<T>(pub T);

impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        match &value {
            Value::Object(map) if !map.is_empty() => {}
            Value::Object(_) => return Err(ApiError::BadRequest("empty JSON object".into())),
            other => {
                return Err(ApiError::BadRequest(format!(
                    "expected a JSON object, got {}",
                    json_kind(other)
                )));
            }
        }

        serde_json::from_value(value)
            .map(JsonObject)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
