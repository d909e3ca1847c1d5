pub mod app_config;
pub mod config;
pub mod language;
pub mod products;
pub mod reviews;
pub mod users;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use language::Language;
pub use products::{
    format_price, Attribute, ComparisonResult, Product, ProductDetail, ProductId,
    SpecificationGroup, CURRENCY_UNIT,
};
pub use reviews::{Paging, Review, ReviewPage, Reviewer, StarBucket, VoteAttributes};
pub use users::{SignupRequest, TokenResponse, UserProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Deserializes `null` as the type's default value.
///
/// The backend forwards upstream fields verbatim, so optional-looking fields
/// arrive as explicit `null` rather than being omitted.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
