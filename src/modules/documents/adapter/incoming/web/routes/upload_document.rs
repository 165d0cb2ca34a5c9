use actix_web::http::header;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::documents::application::domain::entities::DocumentType;
use crate::modules::documents::application::domain::policies::UploadPolicyError;
use crate::modules::documents::application::use_cases::upload_document::{
    UploadDocumentError, UploadInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
pub struct UploadQuery {
    /// Original file name, kept for display and download
    pub filename: String,
}

fn map_upload_error(err: UploadDocumentError) -> HttpResponse {
    match err {
        UploadDocumentError::Policy(policy_err) => {
            let code = match &policy_err {
                UploadPolicyError::FileTooLarge(_) => "FILE_TOO_LARGE",
                UploadPolicyError::EmptyFile => "EMPTY_FILE",
                UploadPolicyError::UnsupportedContentType(_) => "UNSUPPORTED_CONTENT_TYPE",
                UploadPolicyError::FileNameTooLong => "FILE_NAME_TOO_LONG",
            };
            ApiResponse::bad_request(code, &policy_err.to_string())
        }
        UploadDocumentError::NotApplicable => ApiResponse::conflict(
            "NOT_APPLICABLE",
            "The visa checklist does not apply to this employee",
        ),
        UploadDocumentError::StorageError => {
            error!("Blob store rejected an upload");
            ApiResponse::internal_error()
        }
        UploadDocumentError::RepositoryError(msg) => {
            error!(error = %msg, "Document upload repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Upload a file into a document slot; re-upload replaces the slot
#[utoipa::path(
    post,
    path = "/api/documents/{doc_type}/upload",
    tag = "documents",
    params(
        ("doc_type" = String, Path, description = "Document slot, e.g. opt_receipt"),
        UploadQuery
    ),
    request_body(content = Vec<u8>, content_type = "application/pdf"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Document stored, pending review"),
        (status = 400, description = "Unknown slot or rejected by upload policy", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Checklist does not apply to this employee", body = ErrorResponse)
    )
)]
#[post("/api/documents/{doc_type}/upload")]
pub async fn upload_document_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let doc_type = match DocumentType::parse(&path.into_inner()) {
        Some(t) => t,
        None => return ApiResponse::bad_request("INVALID_DOC_TYPE", "Unknown document slot"),
    };

    let content_type = match req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(ct) => ct.to_string(),
        None => {
            return ApiResponse::bad_request("MISSING_CONTENT_TYPE", "Content-Type header required")
        }
    };

    let input = UploadInput {
        user_id: user.user_id,
        doc_type,
        file_name: query.into_inner().filename,
        content_type,
        bytes: body.to_vec(),
    };

    match data.upload_document_use_case.execute(input).await {
        Ok(document) => ApiResponse::created(document),
        Err(err) => map_upload_error(err),
    }
}
