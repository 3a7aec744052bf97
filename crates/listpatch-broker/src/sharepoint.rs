//! SharePoint REST specifics: endpoint construction and the reqwest-backed
//! transport.

use std::time::Duration;

use async_trait::async_trait;
use listpatch_core::{
    constants::{MEMBERSHIP_PROVIDER_PREFIX, ODATA_VERBOSE},
    ApiResponse, HttpTransport, TransportError,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, IF_MATCH},
    Client,
};

/// Prefix a raw identity name with the membership provider literal, yielding
/// the account form the user-lookup APIs expect.
pub fn provider_account_name(name: &str) -> String {
    format!("{MEMBERSHIP_PROVIDER_PREFIX}{name}")
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Idempotent registration endpoint for an account name.
pub fn ensure_user_url(web_url: &str, account_name: &str) -> String {
    format!("{web_url}/_api/web/ensureuser('{}')", encode(account_name))
}

/// Lookup endpoint returning the site user record for an account name.
pub fn site_users_url(web_url: &str, account_name: &str) -> String {
    format!("{web_url}/_api/web/siteusers(@v)?@v='{}'", encode(account_name))
}

/// Item endpoint targeted by the patch. `item_id` is opaque to callers and
/// embedded unescaped.
pub fn item_url(web_url: &str, list_name: &str, item_id: &str) -> String {
    format!("{web_url}/_api/web/Lists/GetByTitle('{list_name}')/GetItemById({item_id})")
}

/// [`HttpTransport`] backed by a pooled reqwest client.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError(err.to_string()))?;
        Ok(Self { client })
    }

    fn verbose_headers(token: &str) -> Result<HeaderMap, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(ODATA_VERBOSE));
        headers.insert(ACCEPT, HeaderValue::from_static(ODATA_VERBOSE));
        let authorization = HeaderValue::from_str(token).map_err(|_| {
            TransportError("authorization value contains invalid header characters".into())
        })?;
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }

    async fn read(response: reqwest::Response) -> Result<ApiResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, token: &str) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .headers(Self::verbose_headers(token)?)
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Self::read(response).await
    }

    async fn post(&self, url: &str, token: &str) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .headers(Self::verbose_headers(token)?)
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Self::read(response).await
    }

    async fn patch(
        &self,
        url: &str,
        token: &str,
        body: String,
    ) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .patch(url)
            .headers(Self::verbose_headers(token)?)
            .header(IF_MATCH, "*")
            .body(body)
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        Self::read(response).await
    }
}
