//! Guest: a person registered to stay in the property.

use serde::{Deserialize, Serialize};

use crate::choice::define_choice;
use crate::error::ValidationError;
use crate::id::GuestId;
use crate::text;
use crate::time::Timestamp;

define_choice!(
    /// Kind of identity document recorded for a guest.
    IdProofType ("ID proof type") {
        Aadhar => "Aadhar",
        Pan => "PAN",
        Passport => "Passport",
        DrivingLicense => "Driving License",
    }
);

/// A registered guest as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub guest_id: GuestId,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::choice::optional::deserialize")]
    pub id_proof_type: Option<IdProofType>,
    #[serde(default)]
    pub id_proof_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub created_at: Timestamp,
}

/// Body of `POST /api/guests`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGuest {
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub id_proof_type: Option<IdProofType>,
    pub id_proof_number: Option<String>,
    pub address: Option<String>,
}

/// Raw values of the "Add New Guest" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuestForm {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub id_proof_type: String,
    pub id_proof_number: String,
    pub address: String,
}

impl GuestForm {
    /// Check required fields and coerce the form into a [`NewGuest`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] when name or phone is blank,
    /// [`ValidationError::InvalidEmail`] for an email without `@`, and
    /// [`ValidationError::UnknownOption`] for an unrecognised ID proof type.
    pub fn validate(&self) -> Result<NewGuest, ValidationError> {
        let full_name = text::required("Full name", &self.full_name)?;
        let phone_number = text::required("Phone number", &self.phone_number)?;
        let email = text::optional(&self.email);
        if email.as_deref().is_some_and(|e| !e.contains('@')) {
            return Err(ValidationError::InvalidEmail("Email"));
        }
        let id_proof_type = text::select_optional(
            &self.id_proof_type,
            ValidationError::UnknownOption("ID proof type"),
        )?;

        Ok(NewGuest {
            full_name,
            phone_number,
            email,
            id_proof_type,
            id_proof_number: text::optional(&self.id_proof_number),
            address: text::optional(&self.address),
        })
    }
}

impl Guest {
    /// Selector label used when picking a guest for a booking: `Name (phone)`.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.full_name, self.phone_number)
    }
}
