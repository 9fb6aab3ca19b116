//! HTTP client wrapper for the StudyMatch API
//!
//! A thin pass-through over `reqwest`: build the URL from a fixed base,
//! encode the body as JSON, send, and decode the typed response. There is
//! no retry, caching, or authentication layer.

use super::error::{ApiError, ApiResult};
use crate::config::{Config, ConfigPaths};
use crate::error::CliResult;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// API client for the StudyMatch server
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    /// Create an API client from default config paths
    pub fn from_defaults() -> CliResult<Self> {
        let paths = ConfigPaths::new()?;
        let config = Config::load(&paths)?;
        Ok(Self::new(config)?)
    }

    /// Create a new API client
    ///
    /// Fails with `BadUrl` when the configured base URL does not parse.
    pub fn new(config: Config) -> ApiResult<Self> {
        Url::parse(&config.api_url)
            .map_err(|e| ApiError::BadUrl(format!("{}: {e}", config.api_url)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("studymatch-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::RequestFailed(format!("Failed to create HTTP client: {e}")))?;

        let config = Config {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            ..config
        };

        Ok(Self { client, config })
    }

    /// Get a reference to the config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve an endpoint such as `/groups/3/` against the base URL
    pub fn url(&self, endpoint: &str) -> ApiResult<Url> {
        if !endpoint.starts_with('/') {
            return Err(ApiError::BadUrl(format!(
                "endpoint must start with '/': {endpoint}"
            )));
        }
        let raw = format!("{}{}", self.config.api_url, endpoint);
        Url::parse(&raw).map_err(|e| ApiError::BadUrl(format!("{raw}: {e}")))
    }

    /// GET an endpoint and decode the response
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let (status, body) = self.execute(Method::GET, endpoint, None, &[]).await?;
        decode(status, &body)
    }

    /// POST a JSON payload and decode the response
    pub async fn create<T, B>(&self, endpoint: &str, payload: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.create_with_headers(endpoint, payload, &[]).await
    }

    /// POST a JSON payload with extra request headers
    pub async fn create_with_headers<T, B>(
        &self,
        endpoint: &str,
        payload: &B,
        headers: &[(&str, &str)],
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(payload)?;
        let (status, body) = self
            .execute(Method::POST, endpoint, Some(body), headers)
            .await?;
        decode(status, &body)
    }

    /// PUT a JSON payload and decode the response
    pub async fn update<T, B>(&self, endpoint: &str, payload: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode(payload)?;
        let (status, body) = self
            .execute(Method::PUT, endpoint, Some(body), &[])
            .await?;
        decode(status, &body)
    }

    /// Send an arbitrary method with an optional raw JSON body
    pub async fn send_request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&serde_json::Value>,
    ) -> ApiResult<T> {
        let body = body.map(encode).transpose()?;
        let (status, body) = self.execute(method, endpoint, body, &[]).await?;
        decode(status, &body)
    }

    /// DELETE an endpoint; only a 200 counts as success
    pub async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let (status, _) = self.execute(Method::DELETE, endpoint, None, &[]).await?;
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(ApiError::Http(status.as_u16()))
        }
    }

    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        headers: &[(&str, &str)],
    ) -> ApiResult<(StatusCode, Vec<u8>)> {
        let url = self.url(endpoint)?;
        debug!(%method, %url, "sending request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            trace!(body = %String::from_utf8_lossy(&body), "request body");
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Encoding(format!("header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Encoding(format!("header value for '{name}': {e}")))?;
            request = request.header(name, value);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        debug!(
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );
        trace!(body = %String::from_utf8_lossy(&body), "raw response");

        Ok((status, body.to_vec()))
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> ApiResult<Vec<u8>> {
    serde_json::to_vec(payload).map_err(|e| ApiError::Encoding(e.to_string()))
}

/// Map a finished exchange to a typed value
///
/// Non-2xx is an HTTP error regardless of body; an empty 2xx body is
/// missing data; anything else must parse as `T`.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ApiResult<T> {
    if !status.is_success() {
        return Err(ApiError::Http(status.as_u16()));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::MissingData);
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Decoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    fn client() -> ApiClient {
        ApiClient::new(Config {
            api_url: "http://localhost:8000/".to_string(),
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        assert_eq!(client().config().api_url, "http://localhost:8000");
    }

    #[test]
    fn test_new_rejects_bad_base_url() {
        let result = ApiClient::new(Config {
            api_url: "not a url".to_string(),
            timeout_secs: 5,
        });
        assert!(matches!(result, Err(ApiError::BadUrl(_))));
    }

    #[test]
    fn test_url_joins_endpoint() {
        let url = client().url("/groups/3/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/groups/3/");
    }

    #[test]
    fn test_url_requires_leading_slash() {
        assert!(matches!(
            client().url("groups/"),
            Err(ApiError::BadUrl(_))
        ));
    }

    #[test]
    fn test_decode_success() {
        let item: Item = decode(StatusCode::CREATED, br#"{"id": 4}"#).unwrap();
        assert_eq!(item, Item { id: 4 });
    }

    #[test]
    fn test_decode_non_success_is_http() {
        let result: ApiResult<Item> = decode(StatusCode::NOT_FOUND, br#"{"id": 4}"#);
        assert!(matches!(result, Err(ApiError::Http(404))));
    }

    #[test]
    fn test_decode_empty_body_is_missing_data() {
        let result: ApiResult<Item> = decode(StatusCode::OK, b"  \n");
        assert!(matches!(result, Err(ApiError::MissingData)));
    }

    #[test]
    fn test_decode_schema_mismatch() {
        let result: ApiResult<Item> = decode(StatusCode::OK, br#"{"name": "x"}"#);
        assert!(matches!(result, Err(ApiError::Decoding(_))));
    }

    #[test]
    fn test_encode_rejects_non_string_map_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], 1);
        assert!(matches!(encode(&map), Err(ApiError::Encoding(_))));
    }
}
