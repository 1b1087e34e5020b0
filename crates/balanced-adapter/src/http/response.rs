/*
[INPUT]:  Raw response bodies read from the Balanced API
[OUTPUT]: Envelope classification (API error vs success bytes)
[POS]:    HTTP layer - response disambiguation
[UPDATE]: When the error envelope shape or the error heuristic changes
*/

use bytes::Bytes;

use super::error::ApiError;

/// Outcome of one round trip once the body has been inspected
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Body is an API error envelope
    Failure(ApiError),
    /// Body is left for the caller to decode into its own schema
    Success(Bytes),
}

/// Decide whether a body is an error envelope.
///
/// The API does not reliably signal failure through the status line, so the
/// only signal is a non-empty `status` string in the body. Bodies that are
/// not JSON objects, leave `status` empty, or do not fit the envelope's
/// field types are successes.
///
/// Success schemas that carry their own `status` field (debits, credits)
/// are indistinguishable from errors under this rule.
pub fn classify(body: Bytes) -> Envelope {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(&body) else {
        return Envelope::Success(body);
    };

    let has_status = value
        .get("status")
        .and_then(serde_json::Value::as_str)
        .is_some_and(|status| !status.is_empty());
    if !has_status {
        return Envelope::Success(body);
    }

    match serde_json::from_value::<ApiError>(value) {
        Ok(err) => Envelope::Failure(err),
        Err(_) => Envelope::Success(body),
    }
}
