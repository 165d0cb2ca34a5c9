use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::documents::application::use_cases::visa_status::{
    VisaStatus, VisaStatusError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_visa_status_error(err: VisaStatusError) -> HttpResponse {
    match err {
        VisaStatusError::NotApplicable => ApiResponse::conflict(
            "NOT_APPLICABLE",
            "The visa checklist does not apply to this employee",
        ),
        VisaStatusError::RepositoryError(msg) => {
            error!(error = %msg, "Visa status repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Current visa checklist state and the single next actionable step
#[utoipa::path(
    get,
    path = "/api/documents/visa-status",
    tag = "documents",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Checklist state", body = VisaStatus),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Checklist does not apply to this employee", body = ErrorResponse)
    )
)]
#[get("/api/documents/visa-status")]
pub async fn visa_status_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.visa_status_use_case.execute(user.user_id).await {
        Ok(status) => ApiResponse::success(status),
        Err(err) => map_visa_status_error(err),
    }
}
