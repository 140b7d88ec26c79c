//! Room: an inventory unit with a type, a monthly rent and an occupancy status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::choice::define_choice;
use crate::error::ValidationError;
use crate::id::RoomId;
use crate::money::{self, format_currency};
use crate::text;
use crate::time::Timestamp;

define_choice!(
    /// Room category.
    RoomType ("room type") {
        Single => "Single",
        Double => "Double",
        Triple => "Triple",
        Deluxe => "Deluxe",
    }
);

define_choice!(
    /// Whether a room can currently be booked.
    #[derive(Default)]
    OccupancyStatus ("occupancy status") {
        #[default]
        Available => "Available",
        Occupied => "Occupied",
        Maintenance => "Maintenance",
    }
);

/// A room as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    pub room_number: String,
    pub room_type: RoomType,
    pub monthly_rent: Decimal,
    #[serde(default)]
    pub occupancy_status: OccupancyStatus,
    pub created_at: Timestamp,
}

impl Room {
    /// Whether the room may be offered for a new booking.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.occupancy_status == OccupancyStatus::Available
    }

    /// Short label: `101 - Single`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.room_number, self.room_type)
    }

    /// Selector label including rent: `101 - Single (₹5,000)`.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.label(), format_currency(self.monthly_rent))
    }
}

/// Body of `POST /api/rooms`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRoom {
    pub room_number: String,
    pub room_type: RoomType,
    pub monthly_rent: Decimal,
    pub occupancy_status: OccupancyStatus,
}

/// Raw values of the "Add New Room" form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RoomForm {
    pub room_number: String,
    pub room_type: String,
    pub monthly_rent: String,
    pub occupancy_status: String,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            room_number: String::new(),
            room_type: String::new(),
            monthly_rent: String::new(),
            occupancy_status: OccupancyStatus::Available.as_str().to_string(),
        }
    }
}

impl RoomForm {
    /// Check required fields and coerce the form into a [`NewRoom`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a blank room number, a missing or
    /// unknown type/status, or a rent that is not a positive number.
    pub fn validate(&self) -> Result<NewRoom, ValidationError> {
        let room_number = text::required("Room number", &self.room_number)?;
        let room_type = text::select(
            "Room type",
            &self.room_type,
            ValidationError::UnknownOption("Room type"),
        )?;
        let monthly_rent = money::parse_amount("Monthly rent", &self.monthly_rent)?;
        let occupancy_status = text::select(
            "Occupancy status",
            &self.occupancy_status,
            ValidationError::UnknownOption("Occupancy status"),
        )?;

        Ok(NewRoom {
            room_number,
            room_type,
            monthly_rent,
            occupancy_status,
        })
    }
}

/// Room counts per occupancy status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccupancyCounts {
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub total: usize,
}

impl OccupancyCounts {
    /// Tally rooms by status.
    #[must_use]
    pub fn tally<'a, I>(rooms: I) -> Self
    where
        I: IntoIterator<Item = &'a Room>,
    {
        rooms.into_iter().fold(Self::default(), |mut acc, room| {
            acc.total += 1;
            match room.occupancy_status {
                OccupancyStatus::Available => acc.available += 1,
                OccupancyStatus::Occupied => acc.occupied += 1,
                OccupancyStatus::Maintenance => acc.maintenance += 1,
            }
            acc
        })
    }

    /// Occupied share of all rooms, see [`occupancy_rate`].
    #[must_use]
    pub fn occupancy_rate(&self) -> String {
        occupancy_rate(self.occupied, self.total)
    }
}

/// Occupied ÷ total as a percentage with one decimal (`"75.0%"`).
///
/// Returns `"0%"` when there are no rooms.
#[must_use]
pub fn occupancy_rate(occupied: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    // Tenths of a percent, halves rounded up.
    let tenths = (occupied * 1000 + total / 2) / total;
    format!("{}.{}%", tenths / 10, tenths % 10)
}
