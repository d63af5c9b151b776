//! Fixed-interval polling
//!
//! One poller per view. The job runs once immediately, then once per
//! interval REGARDLESS of whether the previous attempt succeeded, until the
//! poller is cancelled or dropped. Views own their poller, so tearing a
//! view down tears its timer down with it; independent views keep
//! independent timers with no ordering between their ticks.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Handle to a background polling loop
#[derive(Debug)]
pub struct Poller {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn a polling loop running `job` now and then every `interval`
    pub fn spawn<F, Fut>(interval: Duration, mut job: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let token = CancellationToken::new();
        let loop_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => break,
                    _ = ticker.tick() => job().await,
                }
            }
        });

        Self { token, handle }
    }

    /// Stop the polling loop
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.token.cancel();
        self.handle.abort();
    }
}
