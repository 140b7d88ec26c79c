//! Payment: money received against a booking.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::choice::define_choice;
use crate::error::ValidationError;
use crate::id::{BookingId, PaymentId};
use crate::money;
use crate::text;
use crate::time::{self, Date, Timestamp};

define_choice!(
    /// How a payment was made.
    #[derive(Default)]
    PaymentMethod ("payment method") {
        #[default]
        Cash => "Cash",
        Upi => "UPI",
        Card => "Card",
        BankTransfer => "Bank Transfer",
    }
);

/// A recorded payment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub booking_id: BookingId,
    pub amount_paid: Decimal,
    pub payment_date: Date,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub remarks: Option<String>,
    pub created_at: Timestamp,
}

impl Payment {
    /// Whether the payment falls in the same calendar month as `day`.
    #[must_use]
    pub fn is_in_month_of(&self, day: Date) -> bool {
        self.payment_date.year() == day.year() && self.payment_date.month() == day.month()
    }
}

/// Body of `POST /api/payments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPayment {
    pub booking_id: BookingId,
    pub amount_paid: Decimal,
    pub payment_date: Date,
    pub payment_method: PaymentMethod,
    pub remarks: Option<String>,
}

/// Raw values of the "Record New Payment" form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentForm {
    pub booking_id: String,
    pub amount_paid: String,
    pub payment_date: String,
    pub payment_method: String,
    pub remarks: String,
}

impl Default for PaymentForm {
    /// Blank form dated today, paid in cash.
    fn default() -> Self {
        Self {
            booking_id: String::new(),
            amount_paid: String::new(),
            payment_date: time::input_value(time::today()),
            payment_method: PaymentMethod::Cash.as_str().to_string(),
            remarks: String::new(),
        }
    }
}

impl PaymentForm {
    /// Check required fields and coerce the form into a [`NewPayment`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for a missing booking, a non-positive
    /// amount, a malformed date, or an unknown payment method.
    pub fn validate(&self) -> Result<NewPayment, ValidationError> {
        let booking_id = text::select(
            "Booking",
            &self.booking_id,
            ValidationError::InvalidNumber("Booking"),
        )?;
        let amount_paid = money::parse_amount("Amount paid", &self.amount_paid)?;
        let payment_date = time::parse_date("Payment date", &self.payment_date)?;
        let payment_method = text::select(
            "Payment method",
            &self.payment_method,
            ValidationError::UnknownOption("Payment method"),
        )?;

        Ok(NewPayment {
            booking_id,
            amount_paid,
            payment_date,
            payment_method,
            remarks: text::optional(&self.remarks),
        })
    }
}
