use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Cancellable single-slot trailing debounce.
///
/// At most one timer is pending at any time; scheduling again cancels the
/// previous timer and restarts the quiet period, so only the action from the
/// last call in a burst runs.
#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Run `action` once `delay` has elapsed without another `call`.
    pub fn call<F>(&mut self, delay: Duration, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Drop the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
