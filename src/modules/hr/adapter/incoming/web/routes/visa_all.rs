use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::hr::application::use_cases::visa_all::{VisaAllError, VisaEmployeeSummary};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_visa_all_error(err: VisaAllError) -> HttpResponse {
    match err {
        VisaAllError::RepositoryError(msg) => {
            error!(error = %msg, "Visa roster repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Visa employees with at least one approved checklist document
#[utoipa::path(
    get,
    path = "/api/hr/visa/all",
    tag = "hr",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visa employee roster", body = inline(SuccessResponse<Vec<VisaEmployeeSummary>>)),
        (status = 403, description = "HR role required", body = ErrorResponse)
    )
)]
#[get("/api/hr/visa/all")]
pub async fn visa_all_handler(_hr: HrUser, data: web::Data<AppState>) -> impl Responder {
    match data.visa_all_use_case.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(err) => map_visa_all_error(err),
    }
}
