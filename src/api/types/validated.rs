//! Schema-validated request extractor

use std::collections::HashMap;

use axum::{
    body::to_bytes,
    extract::{rejection::PathRejection, FromRequest, FromRequestParts, Path, Query, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::error;

use super::error::ApiError;
use crate::api::middleware::MAX_BODY_SIZE;
use crate::api::state::AppState;
use crate::domain::{RawRequest, RequestSchemas};

/// A typed view over `{ params, query, body }` with the schemas it is checked
/// against
pub trait RequestShape: DeserializeOwned {
    fn schemas() -> RequestSchemas;
}

/// Extractor that runs the validation engine before the handler
///
/// Path parameters, query string and JSON body are gathered into untyped
/// fragments, validated, then deserialized into `T`. An empty body counts as
/// an empty object.
#[derive(Debug, Clone)]
pub struct Validated<T>(pub T);

impl<T> FromRequest<AppState> for Validated<T>
where
    T: RequestShape,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let params = match Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
        {
            Ok(Path(params)) => params,
            Err(PathRejection::MissingPathParams(_)) => HashMap::new(),
            Err(rejection) => return Err(ApiError::bad_request(rejection.body_text())),
        };

        let Query(query) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        let bytes = to_bytes(body, MAX_BODY_SIZE)
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {}", e)))?;

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(&bytes)
                .map_err(|e| ApiError::bad_request(format!("Malformed JSON body: {}", e)))?
        };

        let raw = RawRequest {
            params: to_object(params),
            query: to_object(query),
            body,
        };

        let validated = state.validation.validate(&T::schemas(), raw)?;

        serde_json::from_value(validated.into_value())
            .map(Validated)
            .map_err(|e| {
                error!(error = %e, "Validated request does not fit its typed shape");
                ApiError::internal("Internal server error")
            })
    }
}

fn to_object(fields: HashMap<String, String>) -> Value {
    Value::Object(
        fields
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
    )
}
