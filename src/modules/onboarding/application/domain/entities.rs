use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of an onboarding application.
///
/// `NeverSubmitted → Pending → Approved | Rejected`, with `Rejected →
/// Pending` on resubmission. The guards live on this type so route handlers
/// and use cases cannot disagree about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    NeverSubmitted,
    Pending,
    Approved,
    Rejected,
}

impl ProfileStatus {
    /// Employees may only (re)submit before a decision is in flight or after
    /// a rejection. Submitting over a Pending or Approved application would
    /// overwrite a decision in progress or an accepted record.
    pub fn can_submit(&self) -> bool {
        matches!(self, ProfileStatus::NeverSubmitted | ProfileStatus::Rejected)
    }

    /// HR may only decide applications that are actually awaiting review.
    pub fn can_review(&self) -> bool {
        matches!(self, ProfileStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileStatus::NeverSubmitted => "never_submitted",
            ProfileStatus::Pending => "pending",
            ProfileStatus::Approved => "approved",
            ProfileStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<ProfileStatus> {
        match s {
            "never_submitted" => Some(ProfileStatus::NeverSubmitted),
            "pending" => Some(ProfileStatus::Pending),
            "approved" => Some(ProfileStatus::Approved),
            "rejected" => Some(ProfileStatus::Rejected),
            _ => None,
        }
    }
}

/// HR decision on a pending application. Closed set; anything else is
/// rejected at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

/// Visa category declared in the work-authorization section. Only F1(CPT/OPT)
/// makes the document checklist applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisaCategory {
    F1CptOpt,
    H1B,
    L2,
    H4,
    Other(String),
}

// On the wire a visa category is exactly the string the form shows
// ("F1(CPT/OPT)", "H1B", ...), so serde goes through as_str/parse.
impl Serialize for VisaCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VisaCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(VisaCategory::parse(&s))
    }
}

impl VisaCategory {
    pub fn as_str(&self) -> &str {
        match self {
            VisaCategory::F1CptOpt => "F1(CPT/OPT)",
            VisaCategory::H1B => "H1B",
            VisaCategory::L2 => "L2",
            VisaCategory::H4 => "H4",
            VisaCategory::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> VisaCategory {
        match s {
            "F1(CPT/OPT)" => VisaCategory::F1CptOpt,
            "H1B" => VisaCategory::H1B,
            "L2" => VisaCategory::L2,
            "H4" => VisaCategory::H4,
            other => VisaCategory::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResidentType {
    Citizen,
    GreenCard,
}

impl ResidentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidentType::Citizen => "citizen",
            ResidentType::GreenCard => "green_card",
        }
    }

    pub fn parse(s: &str) -> Option<ResidentType> {
        match s {
            "citizen" => Some(ResidentType::Citizen),
            "green_card" => Some(ResidentType::GreenCard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Address {
    pub building: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WorkAuthorization {
    pub is_permanent_resident: bool,
    pub resident_type: Option<ResidentType>,
    #[schema(value_type = Option<String>, example = "F1(CPT/OPT)")]
    pub visa_type: Option<VisaCategory>,
    pub visa_title_other: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmergencyContact {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Reference {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub relationship: String,
}

/// The onboarding application record, one per user.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub status: ProfileStatus,
    pub feedback: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: String,
    pub cell_phone: Option<String>,
    pub work_phone: Option<String>,
    pub ssn: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<Address>,
    pub work_authorization: Option<WorkAuthorization>,
    pub reference: Option<Reference>,
    pub emergency_contacts: Vec<EmergencyContact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// The visa checklist only applies to F1(CPT/OPT) holders.
    pub fn is_visa_tracked(&self) -> bool {
        matches!(
            self.work_authorization,
            Some(WorkAuthorization {
                visa_type: Some(VisaCategory::F1CptOpt),
                ..
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_guard() {
        assert!(ProfileStatus::NeverSubmitted.can_submit());
        assert!(ProfileStatus::Rejected.can_submit());
        assert!(!ProfileStatus::Pending.can_submit());
        assert!(!ProfileStatus::Approved.can_submit());
    }

    #[test]
    fn test_review_guard() {
        assert!(ProfileStatus::Pending.can_review());
        assert!(!ProfileStatus::NeverSubmitted.can_review());
        assert!(!ProfileStatus::Approved.can_review());
        assert!(!ProfileStatus::Rejected.can_review());
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            ProfileStatus::NeverSubmitted,
            ProfileStatus::Pending,
            ProfileStatus::Approved,
            ProfileStatus::Rejected,
        ] {
            assert_eq!(ProfileStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProfileStatus::parse("submitted"), None);
    }

    #[test]
    fn test_visa_category_wire_format() {
        assert_eq!(VisaCategory::F1CptOpt.as_str(), "F1(CPT/OPT)");
        assert_eq!(VisaCategory::parse("F1(CPT/OPT)"), VisaCategory::F1CptOpt);
        assert_eq!(
            VisaCategory::parse("J1"),
            VisaCategory::Other("J1".to_string())
        );
    }
}
