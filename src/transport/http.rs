use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::http::pool::create_http_client;
use crate::payload::CreateDocumentRequest;

use super::Transport;

/// POSTs submissions to the registry with bearer auth.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    auth_token: String,
    product_group: String,
}

impl HttpTransport {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config.http_timeout())?,
            endpoint: config.endpoint()?,
            auth_token: config.auth_token.clone(),
            product_group: config.product_group.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &CreateDocumentRequest) -> Result<String> {
        let start = Instant::now();

        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("pg", self.product_group.as_str())])
            .bearer_auth(&self.auth_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, "registry rejected the submission");
            return Err(AppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        debug!("submission delivered in {}ms", start.elapsed().as_millis());
        Ok(body)
    }
}
