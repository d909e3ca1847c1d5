use std::path::PathBuf;

use shopcmp_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("not signed in")]
    NotAuthenticated,

    /// The current session lacks the capability for the requested action.
    #[error("{action} requires signing in or guest mode")]
    Forbidden { action: &'static str },

    #[error("token store {path}: {source}")]
    TokenStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Client(#[from] ClientError),
}
