use std::time::Duration;

use tokio::time::Instant;

/// Enforces a minimum interval between consecutive rows.
///
/// The first call to [`Pacer::pace`] returns immediately; each later call
/// sleeps until `interval` has elapsed since the previous one returned.
#[derive(Debug)]
pub(crate) struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub(crate) async fn pace(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        self.last = Some(Instant::now());
    }
}
