// crates/shared-kernel/src/infrastructure/retry.rs

use rand::Rng;
use std::time::Duration;
use crate::errors::{DomainError, Result};

#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 20,
        }
    }
}

impl RetryConfig {
    fn backoff(&self, attempt: u32) -> Duration {
        // Exponentiel : 2^attempt * base
        let base_backoff = self.initial_backoff_ms.saturating_mul(2u64.saturating_pow(attempt));

        // Jitter entre 0 et 25% de la base pour désynchroniser les clients
        let jitter = rand::rng().random_range(0..base_backoff / 4 + 1);

        Duration::from_millis(base_backoff + jitter)
    }
}

/// Exécute une action avec une stratégie de retry (Exponential Backoff + Jitter).
/// Seuls les conflits de concurrence sont rejoués, toute autre erreur remonte telle quelle.
pub async fn with_retry<F, Fut, T>(config: RetryConfig, mut action: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;

    loop {
        match action().await {
            Ok(res) => return Ok(res),
            Err(e) if e.is_concurrency_conflict() => {
                if attempt >= config.max_retries {
                    tracing::error!("❌ Giving up after {} retries: {}", config.max_retries, e);
                    return Err(DomainError::TooManyConflicts(format!(
                        "Operation failed after {} retries due to persistent conflicts",
                        config.max_retries
                    )));
                }

                let backoff = config.backoff(attempt);
                tracing::warn!(
                    "🔄 Concurrency conflict (attempt {}/{}), retrying in {:?}...",
                    attempt + 1,
                    config.max_retries,
                    backoff
                );

                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
