use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::hr::application::ports::outgoing::DashboardCounts;
use crate::modules::hr::application::use_cases::dashboard_stats::DashboardStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_stats_error(err: DashboardStatsError) -> HttpResponse {
    match err {
        DashboardStatsError::RepositoryError(msg) => {
            error!(error = %msg, "Dashboard stats repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Headline counts for the HR dashboard
#[utoipa::path(
    get,
    path = "/api/hr/dashboard/stats",
    tag = "hr",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current counts", body = inline(SuccessResponse<DashboardCounts>)),
        (status = 403, description = "HR role required", body = ErrorResponse)
    )
)]
#[get("/api/hr/dashboard/stats")]
pub async fn dashboard_stats_handler(_hr: HrUser, data: web::Data<AppState>) -> impl Responder {
    match data.dashboard_stats_use_case.execute().await {
        Ok(counts) => ApiResponse::success(counts),
        Err(err) => map_stats_error(err),
    }
}
