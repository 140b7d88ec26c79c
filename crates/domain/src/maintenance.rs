//! Maintenance request: an issue reported for a room and its resolution.
//!
//! Requests move forward only: `Pending → In Progress → Resolved`, with a
//! shortcut `Pending → Resolved`. `Resolved` is terminal and is the only
//! status that carries a resolved date.

use serde::{Deserialize, Serialize};

use crate::choice::define_choice;
use crate::error::ValidationError;
use crate::id::{GuestId, RequestId, RoomId};
use crate::text;
use crate::time::{self, Date};

define_choice!(
    /// Progress of a maintenance request.
    #[derive(Default)]
    MaintenanceStatus ("maintenance status") {
        #[default]
        Pending => "Pending",
        InProgress => "In Progress",
        Resolved => "Resolved",
    }
);

impl MaintenanceStatus {
    /// Whether a request in this status may move to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::InProgress | Self::Resolved) | (Self::InProgress, Self::Resolved)
        )
    }

    /// Transitions offered from this status, in button order.
    #[must_use]
    pub fn next_actions(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::InProgress, Self::Resolved],
            Self::InProgress => &[Self::Resolved],
            Self::Resolved => &[],
        }
    }

    /// Button caption for moving a request *into* this status.
    #[must_use]
    pub fn action_label(self) -> &'static str {
        match self {
            Self::Pending => "Reopen",
            Self::InProgress => "Start",
            Self::Resolved => "Resolve",
        }
    }

    /// Whether no further transition exists.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.next_actions().is_empty()
    }
}

/// A maintenance request as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRequest {
    pub request_id: RequestId,
    pub room_id: RoomId,
    #[serde(default)]
    pub guest_id: Option<GuestId>,
    pub issue_description: String,
    pub reported_date: Date,
    #[serde(default)]
    pub status: MaintenanceStatus,
    #[serde(default)]
    pub resolved_date: Option<Date>,
}

impl MaintenanceRequest {
    /// Build the update moving this request to `next` on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTransition`] when `next` is not
    /// reachable from the current status.
    pub fn transition(
        &self,
        next: MaintenanceStatus,
        today: Date,
    ) -> Result<StatusUpdate, ValidationError> {
        if !self.status.can_transition_to(next) {
            return Err(ValidationError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        Ok(StatusUpdate::at(next, today))
    }
}

/// Query of `PATCH /api/maintenance/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: MaintenanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<Date>,
}

impl StatusUpdate {
    /// Target `status`, attaching `today` as resolved date only for `Resolved`.
    #[must_use]
    pub fn at(status: MaintenanceStatus, today: Date) -> Self {
        Self {
            status,
            resolved_date: (status == MaintenanceStatus::Resolved).then_some(today),
        }
    }
}

/// Body of `POST /api/maintenance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMaintenanceRequest {
    pub room_id: RoomId,
    pub guest_id: Option<GuestId>,
    pub issue_description: String,
    pub reported_date: Date,
    pub status: MaintenanceStatus,
    pub resolved_date: Option<Date>,
}

/// Raw values of the "Create Maintenance Request" form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MaintenanceForm {
    pub room_id: String,
    pub guest_id: String,
    pub issue_description: String,
    pub reported_date: String,
    pub status: String,
}

impl Default for MaintenanceForm {
    /// Blank form reported today, pending.
    fn default() -> Self {
        Self {
            room_id: String::new(),
            guest_id: String::new(),
            issue_description: String::new(),
            reported_date: time::input_value(time::today()),
            status: MaintenanceStatus::Pending.as_str().to_string(),
        }
    }
}

impl MaintenanceForm {
    /// Check required fields and coerce the form into a request.
    ///
    /// A request filed directly as `Resolved` is stamped as resolved `today`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a missing room, description or
    /// reported date, a malformed guest selection, or an unknown status.
    pub fn validate(&self, today: Date) -> Result<NewMaintenanceRequest, ValidationError> {
        let room_id = text::select("Room", &self.room_id, ValidationError::InvalidNumber("Room"))?;
        let guest_id =
            text::select_optional(&self.guest_id, ValidationError::InvalidNumber("Guest"))?;
        let issue_description = text::required("Issue description", &self.issue_description)?;
        let reported_date = time::parse_date("Reported date", &self.reported_date)?;
        let status: MaintenanceStatus = text::select(
            "Status",
            &self.status,
            ValidationError::UnknownOption("Status"),
        )?;

        Ok(NewMaintenanceRequest {
            room_id,
            guest_id,
            issue_description,
            reported_date,
            status,
            resolved_date: StatusUpdate::at(status, today).resolved_date,
        })
    }
}

/// Request counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Tally requests by status.
    #[must_use]
    pub fn tally<'a, I>(requests: I) -> Self
    where
        I: IntoIterator<Item = &'a MaintenanceRequest>,
    {
        requests.into_iter().fold(Self::default(), |mut acc, req| {
            acc.total += 1;
            match req.status {
                MaintenanceStatus::Pending => acc.pending += 1,
                MaintenanceStatus::InProgress => acc.in_progress += 1,
                MaintenanceStatus::Resolved => acc.resolved += 1,
            }
            acc
        })
    }
}
