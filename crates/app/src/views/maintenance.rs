//! Maintenance requests and their status workflow.

use pgdesk_domain::error::{BackendError, ValidationError};
use pgdesk_domain::guest::Guest;
use pgdesk_domain::id::RequestId;
use pgdesk_domain::maintenance::{
    MaintenanceForm, MaintenanceRequest, MaintenanceStatus, NewMaintenanceRequest, StatusCounts,
};
use pgdesk_domain::room::Room;
use pgdesk_domain::text::DASH;
use pgdesk_domain::time::{self, Date, format_date};

use super::{SelectOption, UNKNOWN};
use crate::fetch;
use crate::lookup::Collection;
use crate::ports::Backend;
use crate::screen::{Notice, Screen, SubmitError, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceView;

#[derive(Debug, Clone)]
pub struct MaintenanceData {
    pub requests: Collection<MaintenanceRequest>,
    pub rooms: Collection<Room>,
    pub guests: Collection<Guest>,
}

/// A status change offered on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAction {
    pub status: MaintenanceStatus,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceRow {
    pub id: String,
    pub room: String,
    pub guest: String,
    pub issue: String,
    pub reported: String,
    pub status: String,
    pub status_class: String,
    pub resolved: String,
    pub actions: Vec<StatusAction>,
}

impl MaintenanceData {
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.requests)
    }

    /// Every room, labelled `101 - Single`.
    pub fn room_options(&self) -> Vec<SelectOption> {
        self.rooms
            .iter()
            .map(|room| SelectOption::new(room.room_id, room.label()))
            .collect()
    }

    pub fn guest_options(&self) -> Vec<SelectOption> {
        self.guests
            .iter()
            .map(|guest| SelectOption::new(guest.guest_id, guest.full_name.clone()))
            .collect()
    }

    pub fn rows(&self) -> Vec<MaintenanceRow> {
        self.requests
            .iter()
            .map(|request| MaintenanceRow {
                id: request.request_id.to_string(),
                room: self
                    .rooms
                    .get(request.room_id)
                    .map_or_else(|| UNKNOWN.to_string(), Room::label),
                guest: match request.guest_id {
                    None => DASH.to_string(),
                    Some(id) => self
                        .guests
                        .get(id)
                        .map_or_else(|| UNKNOWN.to_string(), |g| g.full_name.clone()),
                },
                issue: request.issue_description.clone(),
                reported: format_date(request.reported_date),
                status: request.status.to_string(),
                status_class: request.status.badge_class(),
                resolved: request
                    .resolved_date
                    .map_or_else(|| DASH.to_string(), format_date),
                actions: request
                    .status
                    .next_actions()
                    .iter()
                    .map(|&status| StatusAction {
                        status,
                        label: status.action_label(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl View for MaintenanceView {
    type Data = MaintenanceData;
    type Form = MaintenanceForm;
    type Record = MaintenanceRequest;

    const TITLE: &'static str = "Maintenance Management";
    const CREATED: &'static str = "Maintenance request created successfully!";
    const CREATE_FAILED: &'static str = "Failed to create maintenance request";

    async fn fetch<B: Backend>(backend: &B) -> Result<MaintenanceData, BackendError> {
        let (requests, rooms, guests) =
            fetch::join3::<B, MaintenanceRequest, Room, Guest>(backend).await?;
        Ok(MaintenanceData {
            requests: requests.into(),
            rooms: rooms.into(),
            guests: guests.into(),
        })
    }

    fn validate(
        form: &MaintenanceForm,
        data: &MaintenanceData,
        today: Date,
    ) -> Result<NewMaintenanceRequest, ValidationError> {
        let draft = form.validate(today)?;
        if !data.rooms.contains(draft.room_id) {
            return Err(ValidationError::UnknownReference {
                entity: "Room",
                id: draft.room_id.to_string(),
            });
        }
        if let Some(guest_id) = draft.guest_id.filter(|&id| !data.guests.contains(id)) {
            return Err(ValidationError::UnknownReference {
                entity: "Guest",
                id: guest_id.to_string(),
            });
        }
        Ok(draft)
    }
}

pub const STATUS_UPDATED: &str = "Maintenance request status updated!";
const STATUS_UPDATE_FAILED: &str = "Failed to update maintenance request";

impl Screen<MaintenanceView> {
    /// Move request `id` to `status` using today's date.
    ///
    /// # Errors
    ///
    /// See [`Screen::update_status_on`].
    pub async fn update_status<B: Backend>(
        &mut self,
        backend: &B,
        id: RequestId,
        status: MaintenanceStatus,
    ) -> Result<Notice, SubmitError> {
        self.update_status_on(backend, id, status, time::today()).await
    }

    /// Move request `id` to `status`, stamping `today` as the resolved date
    /// when resolving, then reload.
    ///
    /// # Errors
    ///
    /// See [`Screen::change_status_on`].
    pub async fn update_status_on<B: Backend>(
        &mut self,
        backend: &B,
        id: RequestId,
        status: MaintenanceStatus,
        today: Date,
    ) -> Result<Notice, SubmitError> {
        let notice = self.change_status_on(backend, id, status, today).await?;
        self.load(backend).await;
        Ok(notice)
    }

    /// Move request `id` to `status` using today's date, without reloading.
    ///
    /// # Errors
    ///
    /// See [`Screen::change_status_on`].
    pub async fn change_status<B: Backend>(
        &mut self,
        backend: &B,
        id: RequestId,
        status: MaintenanceStatus,
    ) -> Result<Notice, SubmitError> {
        self.change_status_on(backend, id, status, time::today()).await
    }

    /// Send the status change for request `id`; the loaded data is left as is.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::NotReady`] before data is loaded, and
    /// [`SubmitError::Rejected`] for an unknown request, a transition the
    /// workflow forbids, or a backend failure.
    #[tracing::instrument(skip(self, backend))]
    pub async fn change_status_on<B: Backend>(
        &mut self,
        backend: &B,
        id: RequestId,
        status: MaintenanceStatus,
        today: Date,
    ) -> Result<Notice, SubmitError> {
        let Some(data) = self.data() else {
            let reason = self.error().unwrap_or("Failed to fetch data").to_string();
            return Err(SubmitError::NotReady(reason));
        };
        let request = data.requests.get(id).ok_or_else(|| {
            SubmitError::rejected(
                ValidationError::UnknownReference {
                    entity: "Maintenance request",
                    id: id.to_string(),
                },
                STATUS_UPDATE_FAILED,
            )
        })?;
        let update = request
            .transition(status, today)
            .map_err(|err| SubmitError::rejected(err, STATUS_UPDATE_FAILED))?;

        if let Err(err) = backend.update_maintenance_status(id, update).await {
            tracing::warn!(error = %err, "status update failed");
            return Err(SubmitError::rejected(err, STATUS_UPDATE_FAILED));
        }
        tracing::info!(%id, status = %status, "maintenance status updated");
        Ok(Notice::new(STATUS_UPDATED))
    }
}
