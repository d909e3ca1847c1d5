//! The explicitly passed session object.

use std::sync::Arc;

use shopcmp_client::{ClientError, ShopClient};
use shopcmp_core::{SignupRequest, UserProfile};

use crate::error::SessionError;
use crate::state::SessionState;
use crate::token_store::TokenStore;

const DEFAULT_LOGIN_FAILURE: &str = "Invalid username or password";

pub struct Session {
    client: Arc<ShopClient>,
    store: TokenStore,
    state: SessionState,
    token: Option<String>,
}

impl Session {
    /// A fresh anonymous session that has not looked at the token store.
    #[must_use]
    pub fn new(client: Arc<ShopClient>, store: TokenStore) -> Self {
        Self {
            client,
            store,
            state: SessionState::Anonymous,
            token: None,
        }
    }

    /// Restores the session from the persisted token.
    ///
    /// A token the backend no longer accepts is deleted and the session
    /// starts anonymous.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TokenStore`] if the token file cannot be read
    /// or a stale token cannot be removed.
    pub async fn restore(
        client: Arc<ShopClient>,
        store: TokenStore,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(client, store);
        let Some(token) = session.store.load()? else {
            return Ok(session);
        };

        match session.client.current_user(&token).await {
            Ok(user) => {
                tracing::debug!(username = %user.username, "restored session from stored token");
                session.state = SessionState::Authenticated(user);
                session.token = Some(token);
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored token rejected, clearing it");
                session.store.clear()?;
            }
        }
        Ok(session)
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Signs in, persists the token and loads the profile.
    ///
    /// # Errors
    ///
    /// - [`SessionError::InvalidCredentials`] if the backend rejects the login.
    /// - [`SessionError::Client`] on network failure or if the profile fetch fails.
    /// - [`SessionError::TokenStore`] if the token cannot be written.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<&UserProfile, SessionError> {
        let token = match self.client.request_token(username, password).await {
            Ok(token) => token.access_token,
            Err(ClientError::HttpStatus { detail, .. }) => {
                return Err(SessionError::InvalidCredentials(
                    detail.unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_owned()),
                ));
            }
            Err(e) => return Err(e.into()),
        };
        self.store.save(&token)?;

        let user = match self.client.current_user(&token).await {
            Ok(user) => user,
            Err(e) => {
                self.store.clear()?;
                return Err(e.into());
            }
        };
        tracing::info!(username = %user.username, "signed in");

        self.token = Some(token);
        self.state = SessionState::Authenticated(user);
        self.user()
    }

    fn user(&self) -> Result<&UserProfile, SessionError> {
        self.state.user().ok_or(SessionError::NotAuthenticated)
    }

    /// Registers an account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Client`] if the backend refuses the signup.
    pub async fn signup(&self, request: &SignupRequest) -> Result<UserProfile, SessionError> {
        let user = self.client.signup(request).await?;
        tracing::info!(username = %user.username, "account created");
        Ok(user)
    }

    /// Forgets the token and returns to the anonymous state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::TokenStore`] if the token file cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        self.token = None;
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Switches an anonymous session to guest mode. Signed-in sessions are left alone.
    pub fn enter_guest(&mut self) {
        if self.state == SessionState::Anonymous {
            self.state = SessionState::Guest;
        }
    }

    pub fn exit_guest(&mut self) {
        if self.state == SessionState::Guest {
            self.state = SessionState::Anonymous;
        }
    }

    /// The signed-in profile.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotAuthenticated`] for guest and anonymous sessions.
    pub fn require_user(&self) -> Result<&UserProfile, SessionError> {
        self.user()
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Forbidden`] when catalog access is not allowed.
    pub fn require_catalog(&self) -> Result<(), SessionError> {
        if self.state.can_view_catalog() {
            Ok(())
        } else {
            Err(SessionError::Forbidden {
                action: "browsing the catalog",
            })
        }
    }

    /// # Errors
    ///
    /// Returns [`SessionError::Forbidden`] when comparing is not allowed.
    pub fn require_compare(&self) -> Result<(), SessionError> {
        if self.state.can_compare() {
            Ok(())
        } else {
            Err(SessionError::Forbidden {
                action: "comparing products",
            })
        }
    }
}
