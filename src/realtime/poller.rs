use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::feed;
use crate::session::SharedSession;

use super::source::{FeedError, FeedSource};

pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Owns the refresh loop. One fetch cycle runs immediately on spawn, then
/// every [`POLL_INTERVAL`], until [`FeedPoller::stop`] is called.
///
/// Cycles run sequentially inside a single task, so at most one fetch is in
/// flight; a tick that comes due mid-fetch is delayed, not stacked.
pub struct FeedPoller {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl FeedPoller {
    pub fn spawn<S>(source: S, session: SharedSession) -> Self
    where
        S: FeedSource + 'static,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            run(source, session, task_token).await;
        });

        Self { token, handle }
    }

    /// Cancels the pending cycle and waits for the task to finish. An
    /// in-flight fetch is dropped at its cancellation point, so no snapshot
    /// write can happen after this returns.
    pub async fn stop(self) {
        self.token.cancel();
        let _ = self.handle.await;
    }
}

async fn run<S: FeedSource>(source: S, session: SharedSession, token: CancellationToken) {
    info!(interval_secs = POLL_INTERVAL.as_secs(), "starting feed poller");

    let mut ticker = tokio::time::interval(POLL_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        tokio::select! {
            biased;
            () = token.cancelled() => break,
            result = cycle(&source, &session) => match result {
                Ok(count) => info!(vehicles = count, "feed refreshed"),
                Err(e) => warn!(error = %e, "feed poll failed"),
            }
        }
    }

    info!("feed poller stopped");
}

/// One fetch cycle. Success replaces the snapshot in a single write and
/// clears any standing error; failure records the error and leaves the
/// previous snapshot in place.
async fn cycle<S: FeedSource>(source: &S, session: &SharedSession) -> Result<usize, FeedError> {
    match source.fetch().await {
        Ok(message) => {
            let observations = feed::parse_feed(message);
            let count = observations.len();
            session.write().await.apply_snapshot(observations);
            Ok(count)
        }
        Err(e) => {
            session.write().await.record_failure(e.to_string());
            Err(e)
        }
    }
}
