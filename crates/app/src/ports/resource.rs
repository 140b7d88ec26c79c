//! Resource port: binds an entity shape to its REST collection.

use pgdesk_domain::booking::{Booking, NewBooking};
use pgdesk_domain::guest::{Guest, NewGuest};
use pgdesk_domain::maintenance::{MaintenanceRequest, NewMaintenanceRequest};
use pgdesk_domain::payment::{NewPayment, Payment};
use pgdesk_domain::room::{NewRoom, Room};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// An entity exposed by the backend as a collection under [`Resource::PATH`].
///
/// `GET PATH` returns a JSON array of `Self`; `POST PATH` accepts a
/// [`Resource::Draft`] and returns the created `Self`.
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Collection path relative to the backend base URL.
    const PATH: &'static str;

    /// Singular noun used in log lines and messages.
    const NAME: &'static str;

    /// Creation payload: the entity minus backend-assigned fields.
    type Draft: Serialize + Send + Sync;
}

impl Resource for Guest {
    const PATH: &'static str = "/api/guests";
    const NAME: &'static str = "guest";
    type Draft = NewGuest;
}

impl Resource for Room {
    const PATH: &'static str = "/api/rooms";
    const NAME: &'static str = "room";
    type Draft = NewRoom;
}

impl Resource for Booking {
    const PATH: &'static str = "/api/bookings";
    const NAME: &'static str = "booking";
    type Draft = NewBooking;
}

impl Resource for Payment {
    const PATH: &'static str = "/api/payments";
    const NAME: &'static str = "payment";
    type Draft = NewPayment;
}

impl Resource for MaintenanceRequest {
    const PATH: &'static str = "/api/maintenance";
    const NAME: &'static str = "maintenance request";
    type Draft = NewMaintenanceRequest;
}
