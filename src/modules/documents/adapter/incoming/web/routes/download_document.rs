use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::documents::application::use_cases::download_document::DownloadDocumentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_download_error(err: DownloadDocumentError) -> HttpResponse {
    match err {
        DownloadDocumentError::DocumentNotFound => {
            ApiResponse::not_found("DOCUMENT_NOT_FOUND", "Document not found")
        }
        DownloadDocumentError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "Not allowed to access this document")
        }
        DownloadDocumentError::StorageError(msg) => {
            error!(error = %msg, "Document download storage error");
            ApiResponse::internal_error()
        }
        DownloadDocumentError::RepositoryError(msg) => {
            error!(error = %msg, "Document download repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch the stored file for a document; employees may only fetch their own
#[utoipa::path(
    get,
    path = "/api/documents/{document_id}/download",
    tag = "documents",
    params(("document_id" = Uuid, Path, description = "Document to download")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "File bytes with the stored content type"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Document belongs to another employee", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    )
)]
#[get("/api/documents/{document_id}/download")]
pub async fn download_document_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .download_document_use_case
        .execute(path.into_inner(), user.user_id, user.role)
        .await
    {
        Ok(file) => HttpResponse::Ok()
            .content_type(file.content_type)
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", file.file_name),
            ))
            .body(file.bytes),
        Err(err) => map_download_error(err),
    }
}
