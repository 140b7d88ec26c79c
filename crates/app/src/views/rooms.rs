//! Room inventory.

use pgdesk_domain::error::{BackendError, ValidationError};
use pgdesk_domain::money::format_currency;
use pgdesk_domain::room::{NewRoom, OccupancyCounts, Room, RoomForm};
use pgdesk_domain::time::{Date, format_timestamp};

use crate::fetch;
use crate::ports::Backend;
use crate::screen::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomView;

#[derive(Debug, Clone, PartialEq)]
pub struct RoomsData {
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRow {
    pub id: String,
    pub room_number: String,
    pub room_type: String,
    pub monthly_rent: String,
    pub status: String,
    pub status_class: String,
    pub created: String,
}

impl From<&Room> for RoomRow {
    fn from(room: &Room) -> Self {
        Self {
            id: room.room_id.to_string(),
            room_number: room.room_number.clone(),
            room_type: room.room_type.to_string(),
            monthly_rent: format_currency(room.monthly_rent),
            status: room.occupancy_status.to_string(),
            status_class: room.occupancy_status.badge_class(),
            created: format_timestamp(room.created_at),
        }
    }
}

impl RoomsData {
    pub fn counts(&self) -> OccupancyCounts {
        OccupancyCounts::tally(&self.rooms)
    }

    pub fn rows(&self) -> Vec<RoomRow> {
        self.rooms.iter().map(RoomRow::from).collect()
    }
}

impl View for RoomView {
    type Data = RoomsData;
    type Form = RoomForm;
    type Record = Room;

    const TITLE: &'static str = "Room Management";
    const CREATED: &'static str = "Room added successfully!";
    const CREATE_FAILED: &'static str = "Failed to create room";

    async fn fetch<B: Backend>(backend: &B) -> Result<RoomsData, BackendError> {
        let rooms = fetch::one::<B, Room>(backend).await?;
        Ok(RoomsData { rooms })
    }

    fn validate(form: &RoomForm, _data: &RoomsData, _today: Date) -> Result<NewRoom, ValidationError> {
        form.validate()
    }
}
