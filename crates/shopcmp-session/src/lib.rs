//! Session state for the comparison front-end: who the user is, what they may
//! do, and the bearer token persisted between runs.

pub mod error;
pub mod session;
pub mod state;
pub mod token_store;

pub use error::SessionError;
pub use session::Session;
pub use state::SessionState;
pub use token_store::TokenStore;
