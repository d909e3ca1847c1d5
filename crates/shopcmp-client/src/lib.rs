//! HTTP client for the product-comparison backend.
//!
//! Every call goes through [`ShopClient::fetch_with_retry`], which retries
//! any failure with plain exponential backoff. The typed endpoint methods in
//! [`catalog`] and [`auth`] are thin wrappers over it.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod error;
pub mod request;
pub mod retry;

pub use client::ShopClient;
pub use error::ClientError;
pub use request::{RequestBody, RequestOptions};
pub use retry::{backoff_delay_ms, retry_with_backoff};
