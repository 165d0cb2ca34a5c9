use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::entities::{Address, EmergencyContact, Reference, WorkAuthorization};
use chrono::NaiveDate;

/// Everything the employee can write on the onboarding form. On submit these
/// fields overwrite the profile wholesale; HR never edits them.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: String,
    pub cell_phone: Option<String>,
    pub work_phone: Option<String>,
    pub ssn: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Address,
    pub work_authorization: WorkAuthorization,
    pub reference: Option<Reference>,
    #[serde(default)]
    pub emergency_contacts: Vec<EmergencyContact>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftValidationError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number (expected 10 digits)")]
    InvalidPhone,

    #[error("Invalid zip code")]
    InvalidZip,

    #[error("Invalid SSN")]
    InvalidSsn,

    #[error("resident_type must be set exactly when permanent resident")]
    ResidentTypeMismatch,

    #[error("visa fields only apply to non-permanent residents")]
    VisaFieldsMismatch,

    #[error("Work authorization end date must be after start date")]
    EndDateBeforeStartDate,
}

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-?\d{3}-?\d{4}$").unwrap());
static ZIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").unwrap());
static SSN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-?\d{2}-?\d{4}$").unwrap());

fn phone_ok(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

fn zip_ok(s: &str) -> bool {
    ZIP_RE.is_match(s)
}

fn ssn_ok(s: &str) -> bool {
    SSN_RE.is_match(s)
}

impl ProfileDraft {
    /// Field-shape and cross-field rules from the onboarding form. Called on
    /// every submission, before any state transition.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(DraftValidationError::MissingField("first_name"));
        }
        if self.last_name.trim().is_empty() {
            return Err(DraftValidationError::MissingField("last_name"));
        }
        if !email_address::EmailAddress::is_valid(&self.email) {
            return Err(DraftValidationError::InvalidEmail);
        }

        for phone in [&self.cell_phone, &self.work_phone].into_iter().flatten() {
            if !phone_ok(phone) {
                return Err(DraftValidationError::InvalidPhone);
            }
        }

        if !zip_ok(&self.address.zip) {
            return Err(DraftValidationError::InvalidZip);
        }

        if let Some(ssn) = &self.ssn {
            if !ssn_ok(ssn) {
                return Err(DraftValidationError::InvalidSsn);
            }
        }

        let auth = &self.work_authorization;
        if auth.is_permanent_resident {
            if auth.resident_type.is_none() {
                return Err(DraftValidationError::ResidentTypeMismatch);
            }
            if auth.visa_type.is_some() || auth.start_date.is_some() || auth.end_date.is_some() {
                return Err(DraftValidationError::VisaFieldsMismatch);
            }
        } else {
            if auth.resident_type.is_some() {
                return Err(DraftValidationError::ResidentTypeMismatch);
            }
            if auth.visa_type.is_none() {
                return Err(DraftValidationError::MissingField("visa_type"));
            }
        }

        if let (Some(start), Some(end)) = (auth.start_date, auth.end_date) {
            if end <= start {
                return Err(DraftValidationError::EndDateBeforeStartDate);
            }
        }

        Ok(())
    }
}
