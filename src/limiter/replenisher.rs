use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use super::PermitPool;

/// Background task restoring consumed permits once per window.
///
/// The pool is closed whenever the task exits (graceful shutdown or the
/// handle being dropped), so callers observe an explicit stopped state
/// rather than a gate that quietly stopped refilling.
pub struct Replenisher {
    handle: JoinHandle<()>,
    shutdown: watch::Sender<bool>,
}

impl Replenisher {
    pub fn spawn(pool: PermitPool, window: Duration) -> Self {
        let (shutdown, mut rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let _close_on_exit = CloseOnExit(pool.clone());

            let mut ticker = tokio::time::interval(window);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The pool starts full; the first top-up is due one window in.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        pool.replenish();
                    }
                    _ = rx.changed() => {
                        debug!("replenisher shutting down");
                        break;
                    }
                }
            }
        });

        Self { handle, shutdown }
    }

    /// Stops replenishment and closes the pool.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
        info!("rate limiter stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

struct CloseOnExit(PermitPool);

impl Drop for CloseOnExit {
    fn drop(&mut self) {
        self.0.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tops_up_once_per_window() {
        let pool = PermitPool::new(2);
        let replenisher = Replenisher::spawn(pool.clone(), Duration::from_secs(1));

        assert!(pool.try_acquire().unwrap());
        assert!(pool.try_acquire().unwrap());
        assert!(!pool.try_acquire().unwrap());

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert_eq!(pool.available(), 2);
        assert!(pool.try_acquire().unwrap());

        replenisher.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn unused_permits_do_not_accumulate() {
        let pool = PermitPool::new(2);
        let replenisher = Replenisher::spawn(pool.clone(), Duration::from_secs(1));

        // Nothing consumed across several windows.
        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(pool.available(), 2);

        replenisher.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_closes_the_pool() {
        let pool = PermitPool::new(1);
        let replenisher = Replenisher::spawn(pool.clone(), Duration::from_secs(1));
        assert!(replenisher.is_running());

        replenisher.shutdown().await;

        assert!(pool.is_closed());
        assert!(pool.try_acquire().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_replenishment() {
        let pool = PermitPool::new(1);
        let replenisher = Replenisher::spawn(pool.clone(), Duration::from_secs(1));

        drop(replenisher);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(pool.is_closed());
    }
}
