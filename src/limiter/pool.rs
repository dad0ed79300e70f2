use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, TryAcquireError};
use tracing::trace;

use crate::error::{AppError, Result};

/// Counting admission gate for rate-limited submissions.
///
/// The pool starts full. A consumed permit is gone for the rest of the
/// window; the background replenisher tops the pool back up to `capacity`
/// once per window. A closed pool answers every acquisition with
/// [`AppError::LimiterStopped`] instead of starving callers silently.
#[derive(Debug, Clone)]
pub struct PermitPool {
    semaphore: Arc<Semaphore>,
    capacity: usize,
}

impl PermitPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Non-blocking probe. Consumes one permit when available; with one
    /// permit left and two racing callers, exactly one gets `true`.
    pub fn try_acquire(&self) -> Result<bool> {
        match self.semaphore.try_acquire() {
            Ok(permit) => {
                // Spent for the rest of the window, not returned on drop.
                permit.forget();
                Ok(true)
            }
            Err(TryAcquireError::NoPermits) => Ok(false),
            Err(TryAcquireError::Closed) => Err(AppError::LimiterStopped),
        }
    }

    /// Waits up to `wait` for a permit. Timeout is a normal denial, not
    /// an error.
    pub async fn acquire_timeout(&self, wait: Duration) -> Result<bool> {
        match tokio::time::timeout(wait, self.semaphore.acquire()).await {
            Ok(Ok(permit)) => {
                permit.forget();
                Ok(true)
            }
            Ok(Err(_)) => Err(AppError::LimiterStopped),
            Err(_elapsed) => Ok(false),
        }
    }

    /// Tops available permits back up to capacity, never beyond.
    ///
    /// Only the replenisher calls this on a cadence; a caller that consumed
    /// a permit must not hand it back. Concurrent acquirers can only shrink
    /// availability between the read and the add, so the pool cannot
    /// overshoot. Returns the number of permits added.
    pub fn replenish(&self) -> usize {
        let deficit = self
            .capacity
            .saturating_sub(self.semaphore.available_permits());
        if deficit > 0 {
            self.semaphore.add_permits(deficit);
            trace!(added = deficit, "permits replenished");
        }
        deficit
    }

    /// Marks the pool as no longer replenished. Pending and future
    /// acquisitions fail with [`AppError::LimiterStopped`].
    pub fn close(&self) {
        self.semaphore.close();
    }

    pub fn is_closed(&self) -> bool {
        self.semaphore.is_closed()
    }

    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
