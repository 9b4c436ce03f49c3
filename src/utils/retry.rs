use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

/// Runs `op` up to `max_attempts` times, sleeping `delay` between attempts.
/// Returns the first success or the last error once attempts are exhausted.
/// `max_attempts` must be at least 1.
pub async fn retry_with_fixed_delay<T, E, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts => {
                tracing::warn!(
                    "attempt {}/{} failed: {}, retrying in {:?}",
                    attempt,
                    max_attempts,
                    err,
                    delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
