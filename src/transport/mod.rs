use async_trait::async_trait;

use crate::error::Result;
use crate::payload::CreateDocumentRequest;

mod http;

pub use http::HttpTransport;

/// Boundary to the registry: delivers one encoded submission and yields
/// the response body, or fails, exactly once.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &CreateDocumentRequest) -> Result<String>;
}
