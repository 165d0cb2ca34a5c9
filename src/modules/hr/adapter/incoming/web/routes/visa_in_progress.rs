use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::hr::application::use_cases::visa_in_progress::{
    VisaInProgressError, VisaProgressRow,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_in_progress_error(err: VisaInProgressError) -> HttpResponse {
    match err {
        VisaInProgressError::RepositoryError(msg) => {
            error!(error = %msg, "Visa in-progress repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Everyone with an outstanding visa-related action, and what that action is
#[utoipa::path(
    get,
    path = "/api/hr/visa/in-progress",
    tag = "hr",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Outstanding items", body = inline(SuccessResponse<Vec<VisaProgressRow>>)),
        (status = 403, description = "HR role required", body = ErrorResponse)
    )
)]
#[get("/api/hr/visa/in-progress")]
pub async fn visa_in_progress_handler(_hr: HrUser, data: web::Data<AppState>) -> impl Responder {
    match data.visa_in_progress_use_case.execute().await {
        Ok(rows) => ApiResponse::success(rows),
        Err(err) => map_in_progress_error(err),
    }
}
