//! Payload shapes for SharePoint's verbose OData dialect.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    value: String,
}

#[derive(Debug, Deserialize)]
struct SiteUserEnvelope {
    d: SiteUser,
}

#[derive(Debug, Deserialize)]
struct SiteUser {
    #[serde(rename = "Id")]
    id: i64,
}

/// Mine the human-readable message out of a verbose-OData error body
/// (`{"error":{"message":{"value":...}}}`), falling back to the raw body when
/// the payload has some other shape.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message.value)
        .unwrap_or_else(|_| body.to_string())
}

/// Extract the numeric user ID from a site-user envelope (`{"d":{"Id":...}}`).
pub fn parse_user_id(body: &str) -> Result<i64, serde_json::Error> {
    serde_json::from_str::<SiteUserEnvelope>(body).map(|envelope| envelope.d.id)
}
