//! Per-request options for [`crate::ShopClient::fetch_with_retry`].

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;

/// Request body variants the backend accepts.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs, used by `/auth/token`.
    Form(Vec<(String, String)>),
}

/// Method, headers, query and body for one logical request.
///
/// Headers start from `Content-Type: application/json`; anything set here
/// replaces a default of the same name.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post_json(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            body: RequestBody::Json(body),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn post_form(pairs: Vec<(String, String)>) -> Self {
        Self {
            method: Method::POST,
            body: RequestBody::Form(pairs),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Adds an `Authorization: Bearer` header. Tokens that are not valid
    /// header values are dropped with a warning; the backend then answers 401.
    #[must_use]
    pub fn bearer(self, token: &str) -> Self {
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                self.header(AUTHORIZATION, value)
            }
            Err(e) => {
                tracing::warn!(error = %e, "bearer token is not a valid header value");
                self
            }
        }
    }

    /// Default headers merged with the caller's, caller winning per name.
    #[must_use]
    pub fn effective_headers(&self) -> HeaderMap {
        let mut merged = HeaderMap::new();
        let content_type = match self.body {
            RequestBody::Form(_) => "application/x-www-form-urlencoded",
            RequestBody::Empty | RequestBody::Json(_) => "application/json",
        };
        merged.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        for name in self.headers.keys() {
            merged.remove(name);
            for value in self.headers.get_all(name) {
                merged.append(name.clone(), value.clone());
            }
        }
        merged
    }
}
