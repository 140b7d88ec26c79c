//! Booking: a guest occupying a room from a check-in date.

use serde::{Deserialize, Serialize};

use crate::choice::define_choice;
use crate::error::ValidationError;
use crate::id::{BookingId, GuestId, RoomId};
use crate::text;
use crate::time::{self, Date, Timestamp};

define_choice!(
    /// Lifecycle of a booking.
    #[derive(Default)]
    BookingStatus ("booking status") {
        #[default]
        Active => "Active",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
);

/// A booking as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in_date: Date,
    #[serde(default)]
    pub check_out_date: Option<Date>,
    #[serde(default)]
    pub booking_status: BookingStatus,
    pub created_at: Timestamp,
}

impl Booking {
    /// Whether payments may still be recorded against this booking.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.booking_status == BookingStatus::Active
    }
}

/// Body of `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub check_in_date: Date,
    pub check_out_date: Option<Date>,
    pub booking_status: BookingStatus,
}

/// Raw values of the "Create New Booking" form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub guest_id: String,
    pub room_id: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub booking_status: String,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            guest_id: String::new(),
            room_id: String::new(),
            check_in_date: String::new(),
            check_out_date: String::new(),
            booking_status: BookingStatus::Active.as_str().to_string(),
        }
    }
}

impl BookingForm {
    /// Check required fields and coerce the form into a [`NewBooking`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when a selector or check-in date is
    /// missing or malformed, or when check-out precedes check-in.
    pub fn validate(&self) -> Result<NewBooking, ValidationError> {
        let guest_id = text::select("Guest", &self.guest_id, ValidationError::InvalidNumber("Guest"))?;
        let room_id = text::select("Room", &self.room_id, ValidationError::InvalidNumber("Room"))?;
        let check_in_date = time::parse_date("Check-in date", &self.check_in_date)?;
        let check_out_date = time::parse_optional_date("Check-out date", &self.check_out_date)?;
        if check_out_date.is_some_and(|out| out < check_in_date) {
            return Err(ValidationError::CheckOutBeforeCheckIn);
        }
        let booking_status = text::select(
            "Booking status",
            &self.booking_status,
            ValidationError::UnknownOption("Booking status"),
        )?;

        Ok(NewBooking {
            guest_id,
            room_id,
            check_in_date,
            check_out_date,
            booking_status,
        })
    }
}
