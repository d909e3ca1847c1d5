//! Bounded retry with exponential back-off.
//!
//! Every failure is retried the same way: transport errors, non-2xx statuses
//! and undecodable bodies are not told apart. The delay before retry `n`
//! (0-based) is `backoff_base_ms * 2^n`, with no jitter and no cap.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Delay in milliseconds before the retry that follows failed attempt `attempt` (0-based).
///
/// | Attempt that failed | Sleep (base = 1 000 ms) |
/// |---------------------|-------------------------|
/// | 0                   | 1 000 ms                |
/// | 1                   | 2 000 ms                |
/// | 2                   | 4 000 ms                |
#[must_use]
pub fn backoff_delay_ms(backoff_base_ms: u64, attempt: u32) -> u64 {
    backoff_base_ms.saturating_mul(1u64.checked_shl(attempt).unwrap_or(u64::MAX))
}

/// Runs `operation` up to `max_attempts` times in total, sleeping between
/// failed attempts. The error from the last attempt is returned once attempts
/// run out. A `max_attempts` of 0 is treated as 1.
///
/// # Errors
///
/// Returns the error produced by the final attempt.
pub async fn retry_with_backoff<T, E, F, Fut>(
    max_attempts: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt + 1 >= max_attempts {
                    return Err(err);
                }
                let delay_ms = backoff_delay_ms(backoff_base_ms, attempt);
                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts,
                    delay_ms,
                    error = %err,
                    "request failed, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                attempt += 1;
            }
        }
    }
}
