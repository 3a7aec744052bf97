use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use listpatch_core::{apply_resolutions, extract_mentions, odata, HttpTransport};
use serde::Deserialize;

use crate::{http::error::AppError, resolver, sharepoint::item_url};

use super::super::SharedContext;

/// Trusted alternate header populated by the hosting platform's auth layer.
const FALLBACK_TOKEN_HEADER: &str = "x-ms-token-aad-access-token";

#[derive(Deserialize)]
pub struct UpdateQuery {
    #[serde(rename = "webUrl")]
    pub web_url: Option<String>,
    #[serde(rename = "listName")]
    pub list_name: Option<String>,
    /// Accepted for interface compatibility; unused downstream.
    pub query: Option<String>,
    pub id: Option<String>,
}

/// Patch a list item, resolving `"@user(name)"` mention tokens to numeric
/// site user IDs first.
pub async fn update<T>(
    State(ctx): State<SharedContext<T>>,
    Query(params): Query<UpdateQuery>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError>
where
    T: HttpTransport + 'static,
{
    tracing::info!("processing list item update request");
    tracing::debug!(?headers, "inbound headers");

    let Some(raw_token) = access_token(&headers) else {
        tracing::info!("rejecting request: no access token found");
        return Ok((
            StatusCode::UNAUTHORIZED,
            "Unauthorized: No access token!",
        )
            .into_response());
    };
    let token = normalize_token(raw_token);

    let UpdateQuery {
        web_url,
        list_name,
        query,
        id,
    } = params;
    tracing::info!(?web_url, ?list_name, ?id, ?query, "query parameters");

    let (Some(web_url), Some(list_name), Some(id)) = (web_url, list_name, id) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            "Query parameters webUrl, listName and id are required.",
        )
            .into_response());
    };

    let mentions = extract_mentions(&body);
    let body = if mentions.is_empty() {
        body
    } else {
        let resolutions =
            resolver::resolve_mentions(ctx.transport.as_ref(), &web_url, mentions, &token).await?;
        apply_resolutions(body, &resolutions)
    };

    let patched = ctx
        .transport
        .patch(&item_url(&web_url, &list_name, &id), &token, body)
        .await
        .map_err(|err| AppError::internal(err.to_string()))?;

    match patched.status {
        200 | 204 => Ok(StatusCode::OK.into_response()),
        401 => Err(AppError::unauthorized()),
        404 => Err(AppError::not_found()),
        status => {
            tracing::warn!(status, body = %patched.body, "list item patch rejected");
            Err(AppError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                odata::error_message(&patched.body),
            ))
        }
    }
}

fn access_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .or_else(|| headers.get(FALLBACK_TOKEN_HEADER))
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Tokens arriving without a bearer marker get `"Bearer "` appended, yielding
/// `"<token>Bearer "`. The suffix position is a long-standing contract with
/// existing callers and must not be turned into a prefix.
fn normalize_token(token: String) -> String {
    if token.to_lowercase().starts_with("bearer") {
        token
    } else {
        format!("{token}Bearer ")
    }
}
