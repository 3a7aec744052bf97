//! Outbound HTTP capability used for all SharePoint calls.
//!
//! The broker core never talks to the network directly; it is handed an
//! implementation of [`HttpTransport`], which keeps request handling fully
//! testable with in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;

/// Network-level failure raised by a transport implementation.
#[derive(Debug, Clone, Error)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

/// Status and raw body of a completed outbound call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// The three verbs the broker issues against SharePoint.
///
/// Implementations attach the verbose-OData negotiation headers; `token` is
/// sent verbatim as the `Authorization` value.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, token: &str) -> Result<ApiResponse, TransportError>;

    async fn post(&self, url: &str, token: &str) -> Result<ApiResponse, TransportError>;

    /// PATCH with `If-Match: *` and the supplied JSON body.
    async fn patch(
        &self,
        url: &str,
        token: &str,
        body: String,
    ) -> Result<ApiResponse, TransportError>;
}
