//! Authentication endpoints.
//!
//! These make a single attempt each: a rejected credential or token will not
//! become valid by asking again.

use shopcmp_core::{SignupRequest, TokenResponse, UserProfile};

use crate::client::ShopClient;
use crate::error::ClientError;
use crate::request::RequestOptions;

impl ShopClient {
    /// Exchanges a username and password for a bearer token:
    /// `POST /auth/token`, form encoded.
    ///
    /// # Errors
    ///
    /// - [`ClientError::HttpStatus`] if the backend rejects the credentials.
    /// - [`ClientError::Network`] / [`ClientError::Deserialize`] otherwise.
    pub async fn request_token(
        &self,
        username: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        let url = self.endpoint(&["auth", "token"]);
        let options = RequestOptions::post_form(vec![
            ("username".to_owned(), username.to_owned()),
            ("password".to_owned(), password.to_owned()),
        ]);
        self.fetch_with_retry(url, &options, 1).await
    }

    /// Returns the profile the bearer token belongs to: `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::HttpStatus`] if the token is missing, expired or invalid.
    /// - [`ClientError::Network`] / [`ClientError::Deserialize`] otherwise.
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, ClientError> {
        let url = self.endpoint(&["auth", "me"]);
        self.fetch_with_retry(url, &RequestOptions::get().bearer(token), 1)
            .await
    }

    /// Registers a new account: `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::HttpStatus`] if the email or username is taken, or
    ///   the body fails validation.
    /// - [`ClientError::Network`] / [`ClientError::Deserialize`] otherwise.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, ClientError> {
        let url = self.endpoint(&["auth", "signup"]);
        let body = serde_json::json!({
            "email": request.email,
            "username": request.username,
            "password": request.password,
            "full_name": request.full_name,
        });
        self.fetch_with_retry(url, &RequestOptions::post_json(body), 1)
            .await
    }
}
