//! Guest management.

use pgdesk_domain::error::{BackendError, ValidationError};
use pgdesk_domain::guest::{Guest, GuestForm, NewGuest};
use pgdesk_domain::text::or_dash;
use pgdesk_domain::time::{Date, format_timestamp};

use crate::fetch;
use crate::ports::Backend;
use crate::screen::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestView;

/// Everything the guest screen shows.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestsData {
    pub guests: Vec<Guest>,
}

/// A guest as one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestRow {
    pub id: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub id_proof_type: String,
    pub id_proof_number: String,
    pub address: String,
    pub created: String,
}

impl From<&Guest> for GuestRow {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.guest_id.to_string(),
            full_name: guest.full_name.clone(),
            phone_number: guest.phone_number.clone(),
            email: or_dash(guest.email.as_deref()),
            id_proof_type: or_dash(guest.id_proof_type.map(|t| t.as_str())),
            id_proof_number: or_dash(guest.id_proof_number.as_deref()),
            address: or_dash(guest.address.as_deref()),
            created: format_timestamp(guest.created_at),
        }
    }
}

impl GuestsData {
    pub fn rows(&self) -> Vec<GuestRow> {
        self.guests.iter().map(GuestRow::from).collect()
    }
}

impl View for GuestView {
    type Data = GuestsData;
    type Form = GuestForm;
    type Record = Guest;

    const TITLE: &'static str = "Guest Management";
    const CREATED: &'static str = "Guest added successfully!";
    const CREATE_FAILED: &'static str = "Failed to create guest";

    async fn fetch<B: Backend>(backend: &B) -> Result<GuestsData, BackendError> {
        let guests = fetch::one::<B, Guest>(backend).await?;
        Ok(GuestsData { guests })
    }

    fn validate(form: &GuestForm, _data: &GuestsData, _today: Date) -> Result<NewGuest, ValidationError> {
        form.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_guest;

    #[test]
    fn should_render_missing_optionals_as_dash() {
        let data = GuestsData {
            guests: vec![sample_guest(7, "Asha")],
        };
        let row = &data.rows()[0];
        assert_eq!(row.id, "7");
        assert_eq!(row.email, "-");
        assert_eq!(row.address, "-");
        assert_eq!(row.id_proof_type, "Aadhar");
        assert_eq!(row.created, "01/06/2024");
    }
}
