//! Two-step identity resolution against the target site.
//!
//! Each mention resolves through a sequential ensure-then-lookup call chain;
//! distinct mentions resolve concurrently and the first failure aborts the
//! whole batch.

use futures::future::try_join_all;
use listpatch_core::{mentions::Mention, odata, HttpTransport};
use thiserror::Error;

use crate::sharepoint::{ensure_user_url, provider_account_name, site_users_url};

/// Terminal failure for a single identity resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// The remote endpoint rejected the call; carries the upstream-provided
    /// message verbatim.
    #[error("{0}")]
    Remote(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected response payload: {0}")]
    InvalidResponse(String),
}

/// Resolve one identity name to its numeric site user ID.
///
/// Ensures the account exists on the site, then looks up its record. A
/// non-200 on the ensure call is terminal; the lookup is never issued.
pub async fn resolve_user<T: HttpTransport>(
    transport: &T,
    web_url: &str,
    name: &str,
    token: &str,
) -> Result<i64, ResolveError> {
    let account = provider_account_name(name);
    tracing::info!(%account, "resolving site user");

    let ensured = transport
        .post(&ensure_user_url(web_url, &account), token)
        .await
        .map_err(|err| ResolveError::Transport(err.to_string()))?;
    if ensured.status != 200 {
        tracing::warn!(%account, status = ensured.status, "ensure user failed");
        return Err(ResolveError::Remote(odata::error_message(&ensured.body)));
    }
    tracing::debug!(%account, "ensure user succeeded");

    let record = transport
        .get(&site_users_url(web_url, &account), token)
        .await
        .map_err(|err| ResolveError::Transport(err.to_string()))?;
    if record.status != 200 {
        tracing::warn!(%account, status = record.status, "site user lookup failed");
        return Err(ResolveError::Remote(odata::error_message(&record.body)));
    }

    let id = odata::parse_user_id(&record.body)
        .map_err(|err| ResolveError::InvalidResponse(err.to_string()))?;
    tracing::info!(%account, id, "site user resolved");
    Ok(id)
}

/// Fan out one resolution chain per mention and join them all.
///
/// Returns `(mention, id)` pairs for the rewriter; the first failure wins and
/// in-flight chains are left to finish unobserved.
pub async fn resolve_mentions<T: HttpTransport>(
    transport: &T,
    web_url: &str,
    mentions: Vec<Mention>,
    token: &str,
) -> Result<Vec<(Mention, i64)>, ResolveError> {
    try_join_all(mentions.into_iter().map(|mention| async move {
        let id = resolve_user(transport, web_url, &mention.name, token).await?;
        Ok::<_, ResolveError>((mention, id))
    }))
    .await
}
