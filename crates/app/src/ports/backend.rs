//! Backend port: the external REST service owning all persistence.

use std::future::Future;

use pgdesk_domain::error::BackendError;
use pgdesk_domain::id::RequestId;
use pgdesk_domain::maintenance::{MaintenanceRequest, StatusUpdate};

use super::Resource;

/// Access to the REST backend.
///
/// Any non-2xx answer surfaces as [`BackendError::Status`]; requests that
/// never complete surface as [`BackendError::Transport`].
pub trait Backend: Send + Sync {
    /// `GET R::PATH`: every record of a collection.
    fn list<R: Resource>(&self) -> impl Future<Output = Result<Vec<R>, BackendError>> + Send;

    /// `POST R::PATH`: create a record from its draft.
    fn create<R: Resource>(
        &self,
        draft: &R::Draft,
    ) -> impl Future<Output = Result<R, BackendError>> + Send;

    /// `PATCH /api/maintenance/{id}?status=&resolved_date=`: move a request
    /// to a new status.
    fn update_maintenance_status(
        &self,
        id: RequestId,
        update: StatusUpdate,
    ) -> impl Future<Output = Result<MaintenanceRequest, BackendError>> + Send;
}
