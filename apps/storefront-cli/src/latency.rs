//! # Simulated Latency
//!
//! The storefront pauses before showing search results, product details and
//! order confirmations, as if talking to a remote backend. The pause lives
//! here, outside the catalog and cart logic: the computed result is the same
//! with or without it, only the moment it is returned changes.
//!
//! ```text
//! search_products ──► Latency::search(op)
//!                        │
//!                        ├── sleep(search delay)    (skipped when zero)
//!                        │
//!                        └── op() ──► result
//! ```
//!
//! The operation runs *after* the delay, so it observes the state at the
//! moment the result is produced.

use std::time::Duration;

use tracing::trace;

use crate::state::LatencyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    config: LatencyConfig,
}

impl Latency {
    pub fn new(config: LatencyConfig) -> Self {
        Latency { config }
    }

    /// No delays at all.
    pub fn disabled() -> Self {
        Latency::new(LatencyConfig::none())
    }

    pub fn config(&self) -> LatencyConfig {
        self.config
    }

    pub async fn search<T>(&self, op: impl FnOnce() -> T) -> T {
        delayed(self.config.search(), op).await
    }

    pub async fn detail<T>(&self, op: impl FnOnce() -> T) -> T {
        delayed(self.config.detail(), op).await
    }

    pub async fn checkout<T>(&self, op: impl FnOnce() -> T) -> T {
        delayed(self.config.checkout(), op).await
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::new(LatencyConfig::default())
    }
}

/// Waits `delay`, then runs `op`.
pub async fn delayed<T>(delay: Duration, op: impl FnOnce() -> T) -> T {
    if !delay.is_zero() {
        trace!(delay_ms = delay.as_millis() as u64, "Simulated latency");
        tokio::time::sleep(delay).await;
    }
    op()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_search_waits_configured_delay() {
        let latency = Latency::default();
        let start = Instant::now();

        let value = latency.search(|| 42).await;

        assert_eq!(value, 42);
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_delay() {
        let latency = Latency::default();
        let start = Instant::now();
        latency.checkout(|| ()).await;
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_is_immediate() {
        let latency = Latency::disabled();
        let start = Instant::now();
        assert_eq!(latency.detail(|| "ok").await, "ok");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_operation_runs_after_delay() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();

        let task = tokio::spawn(async move {
            delayed(Duration::from_millis(500), || flag.store(true, Ordering::SeqCst)).await
        });

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(!ran.load(Ordering::SeqCst));

        task.await.unwrap();
        assert!(ran.load(Ordering::SeqCst));
    }
}
