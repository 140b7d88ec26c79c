//! HTTP client for the property-management REST service.

use std::time::Duration;

use reqwest::Client;

use pgdesk_app::ports::{Backend, Resource};
use pgdesk_domain::error::BackendError;
use pgdesk_domain::id::RequestId;
use pgdesk_domain::maintenance::{MaintenanceRequest, StatusUpdate};

use crate::response::{handle, transport};

/// [`Backend`] talking JSON over HTTP.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: Client,
    base_url: String,
}

impl ReqwestBackend {
    /// Build a client for the service rooted at `base_url`
    /// (e.g. `http://localhost:8000`). Every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(timeout).build().map_err(transport)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Backend for ReqwestBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, BackendError> {
        tracing::debug!(path = R::PATH, "listing");
        let response = self
            .client
            .get(self.url(R::PATH))
            .send()
            .await
            .map_err(transport)?;
        handle(response).await
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, BackendError> {
        tracing::debug!(path = R::PATH, "creating {}", R::NAME);
        let response = self
            .client
            .post(self.url(R::PATH))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        handle(response).await
    }

    async fn update_maintenance_status(
        &self,
        id: RequestId,
        update: StatusUpdate,
    ) -> Result<MaintenanceRequest, BackendError> {
        let path = format!("{}/{id}", MaintenanceRequest::PATH);
        tracing::debug!(%path, status = %update.status, "updating maintenance status");
        let response = self
            .client
            .patch(self.url(&path))
            .query(&update)
            .send()
            .await
            .map_err(transport)?;
        handle(response).await
    }
}
