//! The shared HTTP client and its retrying request primitive.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shopcmp_core::AppConfig;

use crate::error::ClientError;
use crate::request::{RequestBody, RequestOptions};
use crate::retry::retry_with_backoff;

/// Client for the product-comparison backend.
///
/// Holds no state beyond the connection pool, so it is cheap to share behind
/// an `Arc`. Use [`ShopClient::from_app_config`] in the binary or
/// [`ShopClient::with_base_url`] to point at a mock server in tests.
pub struct ShopClient {
    pub(crate) client: Client,
    pub(crate) base_url: Url,
    /// Attempts per request (including the first) when the caller does not say.
    pub(crate) max_attempts: u32,
    pub(crate) backoff_base_ms: u64,
}

impl ShopClient {
    /// Creates a client from the loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`ShopClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_attempts,
            config.retry_backoff_base_ms,
        )
    }

    /// Creates a client with a custom base URL and retry policy.
    ///
    /// With `timeout_secs` of `None` no request timeout is set, so a slow
    /// response is waited for rather than cut off and retried.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
        max_attempts: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let parsed = Url::parse(base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            max_attempts: max_attempts.max(1),
            backoff_base_ms,
        })
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// [`ShopClient::fetch_with_retry`] with the configured attempt count.
    ///
    /// # Errors
    ///
    /// See [`ShopClient::fetch_with_retry`].
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        options: &RequestOptions,
    ) -> Result<T, ClientError> {
        self.fetch_with_retry(url, options, self.max_attempts).await
    }

    /// Sends the request described by `options` to `url` and decodes the
    /// JSON response, retrying any failure up to `max_attempts` attempts in
    /// total with exponential backoff.
    ///
    /// # Errors
    ///
    /// Returns the error of the final attempt:
    /// - [`ClientError::HttpStatus`] for a non-2xx response.
    /// - [`ClientError::Network`] for a transport failure.
    /// - [`ClientError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_with_retry<T: DeserializeOwned>(
        &self,
        url: Url,
        options: &RequestOptions,
        max_attempts: u32,
    ) -> Result<T, ClientError> {
        retry_with_backoff(max_attempts, self.backoff_base_ms, || {
            self.send_once(url.clone(), options)
        })
        .await
    }

    async fn send_once<T: DeserializeOwned>(
        &self,
        url: Url,
        options: &RequestOptions,
    ) -> Result<T, ClientError> {
        let url_str = url.to_string();
        tracing::debug!(method = %options.method, url = %url_str, "sending request");

        let mut request = self.client.request(options.method.clone(), url);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        request = match &options.body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(value),
            RequestBody::Form(pairs) => request.form(pairs),
        };
        request = request.headers(options.effective_headers());

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                url: url_str,
                detail: extract_detail(&body),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url_str,
            source: e,
        })
    }
}

/// Pulls the `detail` field out of a JSON error body.
///
/// String details are returned as-is; structured ones (validation error
/// lists) are returned as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ShopClient {
        ShopClient::with_base_url(base_url, None, "shopcmp-test/0.1", 3, 0)
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_joins_segments_onto_base() {
        let client = test_client("http://localhost:8000");
        assert_eq!(
            client.endpoint(&["product", "42", "reviews"]).as_str(),
            "http://localhost:8000/product/42/reviews"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let client = test_client("https://example.com/api/");
        assert_eq!(
            client.endpoint(&["search"]).as_str(),
            "https://example.com/api/search"
        );
    }

    #[test]
    fn endpoint_encodes_segments() {
        let client = test_client("http://localhost:8000");
        assert_eq!(
            client.endpoint(&["product", "a/b c"]).as_str(),
            "http://localhost:8000/product/a%2Fb%20c"
        );
    }

    #[test]
    fn rejects_non_http_base_url() {
        let result = ShopClient::with_base_url("mailto:me@example.com", None, "ua", 3, 0);
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn extract_detail_handles_string_and_structured_bodies() {
        assert_eq!(
            extract_detail(r#"{"detail":"Incorrect username or password"}"#).as_deref(),
            Some("Incorrect username or password")
        );
        assert_eq!(
            extract_detail(r#"{"detail":[{"msg":"field required"}]}"#).as_deref(),
            Some(r#"[{"msg":"field required"}]"#)
        );
        assert!(extract_detail("<html>bad gateway</html>").is_none());
        assert!(extract_detail(r#"{"error":"x"}"#).is_none());
    }
}
