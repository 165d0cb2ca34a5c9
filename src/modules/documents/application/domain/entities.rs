use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Every slot a file can be uploaded into. The first four form the ordered
/// visa checklist; driver license and profile picture sit outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    OptReceipt,
    OptEad,
    I983,
    I20,
    DriverLicense,
    ProfilePicture,
}

impl DocumentType {
    /// Fixed review order of the visa checklist. `compute_next_step` walks
    /// this slice and nothing else.
    pub const VISA_CHECKLIST: [DocumentType; 4] = [
        DocumentType::OptReceipt,
        DocumentType::OptEad,
        DocumentType::I983,
        DocumentType::I20,
    ];

    pub fn is_checklist(&self) -> bool {
        Self::VISA_CHECKLIST.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::OptReceipt => "opt_receipt",
            DocumentType::OptEad => "opt_ead",
            DocumentType::I983 => "i983",
            DocumentType::I20 => "i20",
            DocumentType::DriverLicense => "driver_license",
            DocumentType::ProfilePicture => "profile_picture",
        }
    }

    /// Human-readable name, used in emails and HR dashboards.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::OptReceipt => "OPT Receipt",
            DocumentType::OptEad => "OPT EAD",
            DocumentType::I983 => "I-983",
            DocumentType::I20 => "I-20",
            DocumentType::DriverLicense => "Driver License",
            DocumentType::ProfilePicture => "Profile Picture",
        }
    }

    pub fn parse(s: &str) -> Option<DocumentType> {
        match s {
            "opt_receipt" => Some(DocumentType::OptReceipt),
            "opt_ead" => Some(DocumentType::OptEad),
            "i983" => Some(DocumentType::I983),
            "i20" => Some(DocumentType::I20),
            "driver_license" => Some(DocumentType::DriverLicense),
            "profile_picture" => Some(DocumentType::ProfilePicture),
            _ => None,
        }
    }
}

/// Per-slot review state. A slot with no row at all is "not uploaded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<DocumentStatus> {
        match s {
            "pending" => Some(DocumentStatus::Pending),
            "approved" => Some(DocumentStatus::Approved),
            "rejected" => Some(DocumentStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub doc_type: DocumentType,
    /// Opaque blob-store key; never exposed as a URL directly.
    #[serde(skip_serializing)]
    pub object_path: String,
    pub file_name: String,
    pub content_type: String,
    pub status: DocumentStatus,
    pub feedback: String,
    pub uploaded_at: DateTime<Utc>,
}
