//! Rent payments recorded against bookings.

use rust_decimal::Decimal;

use pgdesk_domain::booking::Booking;
use pgdesk_domain::error::{BackendError, ValidationError};
use pgdesk_domain::guest::Guest;
use pgdesk_domain::id::BookingId;
use pgdesk_domain::money::{self, format_currency};
use pgdesk_domain::payment::{NewPayment, Payment, PaymentForm};
use pgdesk_domain::room::Room;
use pgdesk_domain::text::or_dash;
use pgdesk_domain::time::{Date, format_date, format_timestamp};

use super::{SelectOption, UNKNOWN};
use crate::fetch;
use crate::lookup::Collection;
use crate::ports::Backend;
use crate::screen::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentView;

#[derive(Debug, Clone)]
pub struct PaymentsData {
    pub payments: Vec<Payment>,
    pub bookings: Collection<Booking>,
    pub guests: Collection<Guest>,
    pub rooms: Collection<Room>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaymentStats {
    pub count: usize,
    pub total_amount: Decimal,
    pub this_month: usize,
}

impl PaymentStats {
    pub fn total_amount_display(&self) -> String {
        format_currency(self.total_amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRow {
    pub id: String,
    pub booking: String,
    pub amount: String,
    pub date: String,
    pub method: String,
    pub remarks: String,
    pub recorded: String,
}

impl PaymentsData {
    /// `today` decides which payments count as "this month".
    pub fn stats(&self, today: Date) -> PaymentStats {
        PaymentStats {
            count: self.payments.len(),
            total_amount: money::total(self.payments.iter().map(|p| p.amount_paid)),
            this_month: self
                .payments
                .iter()
                .filter(|p| p.is_in_month_of(today))
                .count(),
        }
    }

    /// `Asha - Room 101`, or `Unknown` when the booking is gone.
    fn booking_info(&self, id: BookingId) -> String {
        match self.bookings.get(id) {
            Some(booking) => self.guest_and_room(booking),
            None => UNKNOWN.to_string(),
        }
    }

    fn guest_and_room(&self, booking: &Booking) -> String {
        let guest = self
            .guests
            .get(booking.guest_id)
            .map_or(UNKNOWN, |g| g.full_name.as_str());
        let room = self
            .rooms
            .get(booking.room_id)
            .map_or(UNKNOWN, |r| r.room_number.as_str());
        format!("{guest} - Room {room}")
    }

    /// Active bookings only: `Booking #7 - Asha - Room 101`.
    pub fn booking_options(&self) -> Vec<SelectOption> {
        self.bookings
            .iter()
            .filter(|booking| booking.is_active())
            .map(|booking| {
                SelectOption::new(
                    booking.booking_id,
                    format!(
                        "Booking #{} - {}",
                        booking.booking_id,
                        self.guest_and_room(booking)
                    ),
                )
            })
            .collect()
    }

    pub fn rows(&self) -> Vec<PaymentRow> {
        self.payments
            .iter()
            .map(|payment| PaymentRow {
                id: payment.payment_id.to_string(),
                booking: self.booking_info(payment.booking_id),
                amount: format_currency(payment.amount_paid),
                date: format_date(payment.payment_date),
                method: payment.payment_method.to_string(),
                remarks: or_dash(payment.remarks.as_deref()),
                recorded: format_timestamp(payment.created_at),
            })
            .collect()
    }
}

impl View for PaymentView {
    type Data = PaymentsData;
    type Form = PaymentForm;
    type Record = Payment;

    const TITLE: &'static str = "Payment Management";
    const CREATED: &'static str = "Payment recorded successfully!";
    const CREATE_FAILED: &'static str = "Failed to record payment";

    async fn fetch<B: Backend>(backend: &B) -> Result<PaymentsData, BackendError> {
        let (payments, bookings, guests, rooms) =
            fetch::join4::<B, Payment, Booking, Guest, Room>(backend).await?;
        Ok(PaymentsData {
            payments,
            bookings: bookings.into(),
            guests: guests.into(),
            rooms: rooms.into(),
        })
    }

    fn validate(
        form: &PaymentForm,
        data: &PaymentsData,
        _today: Date,
    ) -> Result<NewPayment, ValidationError> {
        let draft = form.validate()?;
        if !data
            .bookings
            .get(draft.booking_id)
            .is_some_and(Booking::is_active)
        {
            return Err(ValidationError::UnknownReference {
                entity: "Active booking",
                id: draft.booking_id.to_string(),
            });
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use crate::testing::{FakeBackend, sample_booking, sample_guest, sample_payment, sample_room};

    fn seeded() -> FakeBackend {
        let backend = FakeBackend::default();
        backend.insert(&sample_guest(1, "Asha"));
        backend.insert(&sample_room(1, "101", "Occupied"));
        backend.insert(&sample_booking(7, 1, 1, "Active"));
        backend.insert(&sample_booking(8, 1, 1, "Completed"));
        backend.insert(&sample_payment(1, 7, "5000", "2024-06-03"));
        backend.insert(&sample_payment(2, 7, "2500.50", "2024-05-28"));
        backend.insert(&sample_payment(3, 99, "1000", "2024-06-10"));
        backend
    }

    fn june_15() -> Date {
        Date::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[tokio::test]
    async fn should_sum_amounts_and_count_current_month() {
        let backend = seeded();
        let mut screen = Screen::<PaymentView>::new();
        screen.load(&backend).await;

        let stats = screen.data().unwrap().stats(june_15());
        assert_eq!(stats.count, 3);
        assert_eq!(stats.this_month, 2);
        assert_eq!(stats.total_amount_display(), "\u{20B9}8,500.5");
    }

    #[tokio::test]
    async fn should_offer_only_active_bookings() {
        let backend = seeded();
        let mut screen = Screen::<PaymentView>::new();
        screen.load(&backend).await;

        assert_eq!(
            screen.data().unwrap().booking_options(),
            vec![SelectOption::new(7, "Booking #7 - Asha - Room 101")]
        );
    }

    #[tokio::test]
    async fn should_describe_booking_in_rows() {
        let backend = seeded();
        let mut screen = Screen::<PaymentView>::new();
        screen.load(&backend).await;
        let rows = screen.data().unwrap().rows();

        assert_eq!(rows[0].booking, "Asha - Room 101");
        assert_eq!(rows[0].amount, "\u{20B9}5,000");
        assert_eq!(rows[0].date, "03/06/2024");
        assert_eq!(rows[0].remarks, "-");
        assert_eq!(rows[2].booking, "Unknown");
    }

    #[tokio::test]
    async fn should_record_payment_against_active_booking() {
        let backend = seeded();
        let mut screen = Screen::<PaymentView>::new();
        screen.load(&backend).await;

        let form = PaymentForm {
            booking_id: "7".to_string(),
            amount_paid: "4500".to_string(),
            payment_date: "2024-06-15".to_string(),
            ..PaymentForm::default()
        };
        let notice = screen.submit_on(&backend, form, june_15()).await.unwrap();
        assert_eq!(notice.as_str(), "Payment recorded successfully!");

        let (_, body) = &backend.created()[0];
        assert_eq!(body["booking_id"], 7);
        assert_eq!(body["payment_method"], "Cash");
        assert_eq!(screen.data().unwrap().payments.len(), 4);
    }

    #[tokio::test]
    async fn should_reject_completed_booking() {
        let backend = seeded();
        let mut screen = Screen::<PaymentView>::new();
        screen.load(&backend).await;

        let form = PaymentForm {
            booking_id: "8".to_string(),
            amount_paid: "4500".to_string(),
            ..PaymentForm::default()
        };
        let err = screen.submit_on(&backend, form, june_15()).await.unwrap_err();
        assert_eq!(err.message(), "Active booking 8 not found");
    }

    #[tokio::test]
    async fn should_reject_zero_amount() {
        let backend = seeded();
        let mut screen = Screen::<PaymentView>::new();
        screen.load(&backend).await;

        let form = PaymentForm {
            booking_id: "7".to_string(),
            amount_paid: "0".to_string(),
            ..PaymentForm::default()
        };
        let err = screen.submit_on(&backend, form, june_15()).await.unwrap_err();
        assert_eq!(err.message(), "Amount paid must be greater than zero");
    }
}
