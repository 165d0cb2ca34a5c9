use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::documents::application::use_cases::review_document::{
    DocumentDecision, ReviewDocumentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct DocumentReviewRequest {
    /// "approve" or "reject"
    pub decision: DocumentDecision,

    /// Required when rejecting
    #[schema(example = "The scan is missing the second page")]
    pub feedback: Option<String>,
}

fn map_document_review_error(err: ReviewDocumentError) -> HttpResponse {
    match err {
        ReviewDocumentError::DocumentNotFound => {
            ApiResponse::not_found("DOCUMENT_NOT_FOUND", "Document not found")
        }
        ReviewDocumentError::NotPending => {
            ApiResponse::conflict("NOT_PENDING", "Only pending documents can be reviewed")
        }
        ReviewDocumentError::FeedbackRequired => {
            ApiResponse::bad_request("FEEDBACK_REQUIRED", "Feedback is required when rejecting")
        }
        ReviewDocumentError::RepositoryError(msg) => {
            error!(error = %msg, "Document review repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Approve or reject a pending visa document (HR only)
#[utoipa::path(
    post,
    path = "/api/hr/documents/{document_id}/review",
    tag = "hr",
    params(("document_id" = Uuid, Path, description = "Document to review")),
    request_body = DocumentReviewRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Decision recorded"),
        (status = 400, description = "Feedback missing on rejection", body = ErrorResponse),
        (status = 403, description = "HR role required", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 409, description = "Document is not pending", body = ErrorResponse)
    )
)]
#[post("/api/hr/documents/{document_id}/review")]
pub async fn review_document_handler(
    _hr: HrUser,
    path: web::Path<Uuid>,
    req: web::Json<DocumentReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .review_document_use_case
        .execute(path.into_inner(), req.decision, req.feedback)
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({
            "message": "Decision recorded"
        })),
        Err(err) => map_document_review_error(err),
    }
}
