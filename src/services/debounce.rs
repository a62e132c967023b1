use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Collapses bursts of calls so only the most recent one runs — the search
/// box behavior. Each call waits out the quiet window; if a newer call
/// arrived meanwhile, the older one is dropped without running its work.
#[derive(Clone)]
pub struct Debouncer {
    delay: Duration,
    epoch: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Returns `None` when this call was superseded during the window.
    pub async fn run<F, Fut, T>(&self, work: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        sleep(self.delay).await;
        if self.epoch.load(Ordering::SeqCst) != ticket {
            return None;
        }
        Some(work().await)
    }
}
