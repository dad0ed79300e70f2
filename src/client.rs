use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::limiter::PermitPool;
use crate::model::Document;
use crate::payload::CreateDocumentRequest;
use crate::transport::Transport;

/// Outcome of one gated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Registry response body, verbatim.
    Accepted(String),
    /// No permit was available in the current window. Not a fault; the
    /// caller decides whether to retry later.
    Throttled,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }
}

/// How a permit is requested before each submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireMode {
    /// Ask once; throttle immediately when the window budget is spent.
    Probe,
    /// Wait up to the given duration for a later window before throttling.
    /// Same admission bound, different caller-visible latency.
    Wait(Duration),
}

/// Submits documents to the registry, admitting at most the configured
/// number of calls per window through a [`PermitPool`].
pub struct CrptClient {
    pool: PermitPool,
    transport: Arc<dyn Transport>,
    acquire_mode: AcquireMode,
}

impl CrptClient {
    pub fn new(pool: PermitPool, transport: Arc<dyn Transport>, acquire_mode: AcquireMode) -> Self {
        Self {
            pool,
            transport,
            acquire_mode,
        }
    }

    /// Creates a document for introducing goods into circulation.
    ///
    /// Returns [`Submission::Throttled`] without touching the transport
    /// when no permit is available. Transport failures surface as errors,
    /// never as a throttled outcome. No retries happen here.
    pub async fn create_document(&self, document: &Document, signature: &str) -> Result<Submission> {
        let submission_id = Uuid::new_v4();

        let admitted = match self.acquire_mode {
            AcquireMode::Probe => self.pool.try_acquire()?,
            AcquireMode::Wait(timeout) => self.pool.acquire_timeout(timeout).await?,
        };
        if !admitted {
            debug!(%submission_id, "no permit this window, submission throttled");
            return Ok(Submission::Throttled);
        }

        let request = CreateDocumentRequest::from_document(document, signature)?;
        let body = self.transport.send(&request).await?;
        debug!(%submission_id, "submission accepted by the registry");
        Ok(Submission::Accepted(body))
    }
}
