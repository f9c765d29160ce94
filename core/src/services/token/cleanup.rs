//! Periodic pruning of expired revocation records
//!
//! Pruning only keeps the store small. Expiry is checked independently of
//! revocation, so a record removed here belongs to a token that is already
//! rejected as expired.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use ids_shared::config::CleanupConfig;

use crate::errors::DomainError;
use crate::repositories::RevocationRepository;
use crate::services::clock::Clock;

/// Configuration for revocation cleanup
#[derive(Debug, Clone)]
pub struct RevocationCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for RevocationCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600,
            enabled: true,
        }
    }
}

impl From<&CleanupConfig> for RevocationCleanupConfig {
    fn from(config: &CleanupConfig) -> Self {
        Self {
            interval_seconds: config.interval_seconds,
            enabled: config.enabled,
        }
    }
}

/// Service for removing revocation records of tokens that have expired
pub struct RevocationCleanupService<R: RevocationRepository + 'static> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    config: RevocationCleanupConfig,
}

impl<R: RevocationRepository> RevocationCleanupService<R> {
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, config: RevocationCleanupConfig) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Run a single cleanup cycle
    ///
    /// Store failures are recorded in the result rather than returned, so a
    /// transient outage does not stop the background loop.
    pub async fn run_cleanup(&self) -> Result<CleanupResult, DomainError> {
        if !self.config.enabled {
            return Ok(CleanupResult::default());
        }

        let now = self.clock.now();
        let mut result = CleanupResult::default();

        match self.repository.prune(now).await {
            Ok(count) => {
                result.records_pruned = count;
                info!(records_pruned = count, "Pruned expired revocation records");
            }
            Err(e) => {
                error!(error = %e, "Failed to prune revocation records");
                result.errors.push(format!("Revocation cleanup error: {}", e));
            }
        }

        Ok(result)
    }

    /// Start the cleanup service as a background task
    ///
    /// Returns `None` when cleanup is disabled.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Revocation cleanup service is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds.max(1));

        Some(tokio::spawn(async move {
            info!(
                interval_seconds = self.config.interval_seconds,
                "Revocation cleanup service started"
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                match self.run_cleanup().await {
                    Ok(result) => {
                        if !result.errors.is_empty() {
                            warn!("Cleanup completed with errors: {:?}", result.errors);
                        }
                    }
                    Err(e) => {
                        error!("Revocation cleanup cycle failed: {}", e);
                    }
                }
            }
        }))
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default)]
pub struct CleanupResult {
    /// Number of revocation records deleted
    pub records_pruned: usize,
    /// Any errors encountered during cleanup
    pub errors: Vec<String>,
}

impl CleanupResult {
    /// Check if the cleanup was successful (no errors)
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
