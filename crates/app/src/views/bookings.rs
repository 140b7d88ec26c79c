//! Bookings: assigning a guest to an available room.

use pgdesk_domain::booking::{Booking, BookingForm, NewBooking};
use pgdesk_domain::error::{BackendError, ValidationError};
use pgdesk_domain::guest::Guest;
use pgdesk_domain::room::Room;
use pgdesk_domain::text::DASH;
use pgdesk_domain::time::{Date, format_date, format_timestamp};

use super::{SelectOption, UNKNOWN};
use crate::fetch;
use crate::lookup::Collection;
use crate::ports::Backend;
use crate::screen::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingView;

#[derive(Debug, Clone)]
pub struct BookingsData {
    pub bookings: Vec<Booking>,
    pub guests: Collection<Guest>,
    pub rooms: Collection<Room>,
}

/// Headline counts above the bookings table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BookingStats {
    pub active: usize,
    pub total: usize,
    pub available_rooms: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: String,
    pub guest: String,
    pub room: String,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub status_class: String,
    pub created: String,
}

impl BookingsData {
    pub fn stats(&self) -> BookingStats {
        BookingStats {
            active: self.bookings.iter().filter(|b| b.is_active()).count(),
            total: self.bookings.len(),
            available_rooms: self.available_rooms().count(),
        }
    }

    fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_available())
    }

    /// Every guest, labelled `Name (phone)`.
    pub fn guest_options(&self) -> Vec<SelectOption> {
        self.guests
            .iter()
            .map(|guest| SelectOption::new(guest.guest_id, guest.option_label()))
            .collect()
    }

    /// Only rooms that can be booked, labelled with their rent.
    pub fn room_options(&self) -> Vec<SelectOption> {
        self.available_rooms()
            .map(|room| SelectOption::new(room.room_id, room.option_label()))
            .collect()
    }

    /// A booking needs at least one guest and one available room.
    pub fn can_submit(&self) -> bool {
        !self.guests.is_empty() && self.available_rooms().next().is_some()
    }

    pub fn rows(&self) -> Vec<BookingRow> {
        self.bookings
            .iter()
            .map(|booking| BookingRow {
                id: booking.booking_id.to_string(),
                guest: self
                    .guests
                    .get(booking.guest_id)
                    .map_or_else(|| UNKNOWN.to_string(), |g| g.full_name.clone()),
                room: self
                    .rooms
                    .get(booking.room_id)
                    .map_or_else(|| UNKNOWN.to_string(), |r| r.room_number.clone()),
                check_in: format_date(booking.check_in_date),
                check_out: booking
                    .check_out_date
                    .map_or_else(|| DASH.to_string(), format_date),
                status: booking.booking_status.to_string(),
                status_class: booking.booking_status.badge_class(),
                created: format_timestamp(booking.created_at),
            })
            .collect()
    }
}

impl View for BookingView {
    type Data = BookingsData;
    type Form = BookingForm;
    type Record = Booking;

    const TITLE: &'static str = "Booking Management";
    const CREATED: &'static str = "Booking created successfully!";
    const CREATE_FAILED: &'static str = "Failed to create booking";

    async fn fetch<B: Backend>(backend: &B) -> Result<BookingsData, BackendError> {
        let (bookings, guests, rooms) = fetch::join3::<B, Booking, Guest, Room>(backend).await?;
        Ok(BookingsData {
            bookings,
            guests: guests.into(),
            rooms: rooms.into(),
        })
    }

    fn validate(
        form: &BookingForm,
        data: &BookingsData,
        _today: Date,
    ) -> Result<NewBooking, ValidationError> {
        let draft = form.validate()?;
        if !data.guests.contains(draft.guest_id) {
            return Err(ValidationError::UnknownReference {
                entity: "Guest",
                id: draft.guest_id.to_string(),
            });
        }
        if !data
            .rooms
            .get(draft.room_id)
            .is_some_and(Room::is_available)
        {
            return Err(ValidationError::UnknownReference {
                entity: "Available room",
                id: draft.room_id.to_string(),
            });
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use crate::testing::{FakeBackend, sample_booking, sample_guest, sample_room};

    fn seeded() -> FakeBackend {
        let backend = FakeBackend::default();
        backend.insert(&sample_guest(1, "Asha"));
        backend.insert(&sample_room(1, "101", "Available"));
        backend.insert(&sample_room(2, "102", "Occupied"));
        backend.insert(&sample_booking(1, 1, 2, "Active"));
        backend.insert(&sample_booking(2, 9, 2, "Completed"));
        backend
    }

    fn form(guest: &str, room: &str) -> BookingForm {
        BookingForm {
            guest_id: guest.to_string(),
            room_id: room.to_string(),
            check_in_date: "2024-07-01".to_string(),
            ..BookingForm::default()
        }
    }

    #[tokio::test]
    async fn should_derive_stats_and_selectors() {
        let backend = seeded();
        let mut screen = Screen::<BookingView>::new();
        screen.load(&backend).await;
        let data = screen.data().unwrap();

        assert_eq!(
            data.stats(),
            BookingStats {
                active: 1,
                total: 2,
                available_rooms: 1,
            }
        );
        assert_eq!(
            data.room_options(),
            vec![SelectOption::new(1, "101 - Single (\u{20B9}5,000)")]
        );
        assert_eq!(data.guest_options()[0].label, "Asha (9876500001)");
        assert!(data.can_submit());
    }

    #[tokio::test]
    async fn should_resolve_dangling_references_as_unknown() {
        let backend = seeded();
        let mut screen = Screen::<BookingView>::new();
        screen.load(&backend).await;
        let rows = screen.data().unwrap().rows();

        assert_eq!(rows[0].guest, "Asha");
        assert_eq!(rows[0].room, "102");
        assert_eq!(rows[0].check_out, "-");
        assert_eq!(rows[1].guest, "Unknown");
        assert_eq!(rows[1].status_class, "completed");
    }

    #[tokio::test]
    async fn should_disable_submit_without_available_rooms() {
        let backend = FakeBackend::default();
        backend.insert(&sample_guest(1, "Asha"));
        backend.insert(&sample_room(1, "101", "Occupied"));
        let mut screen = Screen::<BookingView>::new();
        screen.load(&backend).await;

        assert!(!screen.data().unwrap().can_submit());
    }

    #[tokio::test]
    async fn should_create_booking_with_numeric_ids() {
        let backend = seeded();
        let mut screen = Screen::<BookingView>::new();
        screen.load(&backend).await;

        let notice = screen.submit(&backend, form("1", "1")).await.unwrap();
        assert_eq!(notice.as_str(), "Booking created successfully!");

        let (_, body) = &backend.created()[0];
        assert_eq!(body["guest_id"], 1);
        assert_eq!(body["room_id"], 1);
        assert_eq!(body["check_out_date"], serde_json::Value::Null);
        assert_eq!(body["booking_status"], "Active");
    }

    #[tokio::test]
    async fn should_reject_room_that_is_not_available() {
        let backend = seeded();
        let mut screen = Screen::<BookingView>::new();
        screen.load(&backend).await;

        let err = screen.submit(&backend, form("1", "2")).await.unwrap_err();
        assert_eq!(err.message(), "Available room 2 not found");
        assert!(backend.created().is_empty());
        assert_eq!(screen.form(), Some(&form("1", "2")));
    }

    #[tokio::test]
    async fn should_reject_unknown_guest() {
        let backend = seeded();
        let mut screen = Screen::<BookingView>::new();
        screen.load(&backend).await;

        let err = screen.submit(&backend, form("42", "1")).await.unwrap_err();
        assert_eq!(err.message(), "Guest 42 not found");
    }
}
