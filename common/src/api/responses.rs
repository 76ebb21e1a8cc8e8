//! Interpretation of raw backend responses.
//!
//! The transport hands over the status code and the body text; these
//! functions decide success, failure or not-found and decode the payload.

use serde_json::Value;

use crate::api::ApiError;
use crate::model::collection::Collection;
use crate::model::user::User;
use crate::store::Snapshot;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Runs `interpret` once the body has been read.
///
/// A body that could not be read fails the call with the read error, even
/// after a 2xx status: it is never taken for an empty answer.
pub fn interpret_body<T>(
    status: u16,
    body: Result<String, ApiError>,
    interpret: impl FnOnce(u16, &str) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    let body = body?;
    interpret(status, &body)
}

/// Response of `GET` on a collection endpoint. An empty 2xx body is an
/// empty collection.
pub fn interpret_listing(collection: Collection, status: u16, body: &str) -> Result<Snapshot, ApiError> {
    if !is_success(status) {
        return Err(ApiError::rejected(status, body));
    }
    if body.trim().is_empty() {
        return Ok(Snapshot::empty(collection));
    }
    Snapshot::decode(collection, body)
}

/// Response of a create `POST`. The created entity in the body is not used:
/// the collection is refetched afterwards.
pub fn interpret_create(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(ApiError::rejected(status, body))
    }
}

/// Response of `GET /api/usuarios/{cpf}`.
///
/// A 404, an empty body, `null`, `{}` or an empty array all mean "no such
/// user". An array answer yields its first element.
pub fn interpret_lookup(status: u16, body: &str) -> Result<Option<User>, ApiError> {
    if status == 404 {
        return Ok(None);
    }
    if !is_success(status) {
        return Err(ApiError::rejected(status, body));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let candidate = match value {
        Value::Null => return Ok(None),
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => first,
            None => return Ok(None),
        },
        Value::Object(ref fields) if fields.is_empty() => return Ok(None),
        other => other,
    };

    serde_json::from_value(candidate)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}
