use serde::Serialize;

use super::entities::{DocumentStatus, DocumentType};

/// The single next actionable item for an applicant's visa checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(tag = "kind", content = "document", rename_all = "snake_case")]
pub enum NextStep {
    /// Slot has never been filled.
    Upload(DocumentType),
    /// Slot was rejected; a corrected file is needed.
    Resubmit(DocumentType),
    /// Slot is uploaded and waiting on HR.
    AwaitingReview(DocumentType),
    /// Every checklist slot is approved.
    Complete,
}

impl NextStep {
    pub fn description(&self) -> String {
        match self {
            NextStep::Upload(t) => format!("Waiting for {} upload", t.display_name()),
            NextStep::Resubmit(t) => format!("{} rejected, waiting for resubmission", t.display_name()),
            NextStep::AwaitingReview(t) => format!("{} awaiting HR review", t.display_name()),
            NextStep::Complete => "All visa documents approved".to_string(),
        }
    }
}

/// Walk the checklist in its fixed order and stop at the first slot that is
/// not Approved. The short-circuit matters: a Pending OPT EAD must block any
/// claim about the I-983, otherwise an applicant appears to have a later
/// next-step while an earlier submission sits unreviewed.
pub fn compute_next_step(slots: &[(DocumentType, DocumentStatus)]) -> NextStep {
    for doc_type in DocumentType::VISA_CHECKLIST {
        let status = slots
            .iter()
            .find(|(t, _)| *t == doc_type)
            .map(|(_, status)| *status);

        match status {
            None => return NextStep::Upload(doc_type),
            Some(DocumentStatus::Rejected) => return NextStep::Resubmit(doc_type),
            Some(DocumentStatus::Pending) => return NextStep::AwaitingReview(doc_type),
            Some(DocumentStatus::Approved) => continue,
        }
    }

    NextStep::Complete
}
