//! The five management views built on [`Screen`](crate::screen::Screen).
//!
//! Each view names the collections it joins, how its creation form is
//! validated, and how records are projected into display rows.

pub mod bookings;
pub mod guests;
pub mod maintenance;
pub mod payments;
pub mod rooms;

pub use bookings::BookingView;
pub use guests::GuestView;
pub use maintenance::MaintenanceView;
pub use payments::PaymentView;
pub use rooms::RoomView;

/// One `<option>` of a form selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            label: label.into(),
        }
    }
}

/// Placeholder for a reference that no longer resolves.
pub const UNKNOWN: &str = "Unknown";
