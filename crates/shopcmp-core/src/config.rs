use crate::app_config::AppConfig;
use crate::{ConfigError, Language};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so only malformed values fail.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize_at_least = |var: &str, default: &str, min: usize| -> Result<usize, ConfigError> {
        let value = or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value < min {
            return Err(invalid(var, format!("must be at least {min}, got {value}")));
        }
        Ok(value)
    };

    let api_url = or_default("SHOPCMP_API_URL", "http://localhost:8000")
        .trim_end_matches('/')
        .to_string();
    if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
        return Err(invalid(
            "SHOPCMP_API_URL",
            format!("expected an http(s) URL, got \"{api_url}\""),
        ));
    }

    let log_level = or_default("SHOPCMP_LOG_LEVEL", "info");
    let request_timeout_secs = match lookup("SHOPCMP_REQUEST_TIMEOUT_SECS") {
        Ok(raw) if !raw.trim().is_empty() => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|e| invalid("SHOPCMP_REQUEST_TIMEOUT_SECS", e.to_string()))?,
        ),
        _ => None,
    };
    let user_agent = or_default("SHOPCMP_USER_AGENT", "shopcmp/0.1 (product-comparison)");

    let max_attempts = parse_u32("SHOPCMP_MAX_ATTEMPTS", "3")?;
    if max_attempts == 0 {
        return Err(invalid("SHOPCMP_MAX_ATTEMPTS", "must be at least 1".to_string()));
    }
    let retry_backoff_base_ms = parse_u64("SHOPCMP_RETRY_BACKOFF_BASE_MS", "1000")?;

    let queue_capacity = parse_usize_at_least("SHOPCMP_QUEUE_CAPACITY", "5", 2)?;
    let page_size = parse_usize_at_least("SHOPCMP_PAGE_SIZE", "3", 1)?;

    let language = or_default("SHOPCMP_LANGUAGE", "en")
        .parse::<Language>()
        .map_err(|e| invalid("SHOPCMP_LANGUAGE", e))?;

    let token_path = PathBuf::from(or_default("SHOPCMP_TOKEN_PATH", "./.shopcmp/token"));

    Ok(AppConfig {
        api_url,
        log_level,
        request_timeout_secs,
        user_agent,
        max_attempts,
        retry_backoff_base_ms,
        queue_capacity,
        page_size,
        language,
        token_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
