use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::onboarding::application::ports::outgoing::ProfileSummary;
use crate::modules::onboarding::application::use_cases::search_employees::SearchEmployeesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring matched against names and email, case-insensitive.
    /// Empty or missing returns the full directory.
    #[serde(default)]
    pub q: String,
}

fn map_search_error(err: SearchEmployeesError) -> HttpResponse {
    match err {
        SearchEmployeesError::RepositoryError(msg) => {
            error!(error = %msg, "Employee search repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Search the employee directory (HR only)
#[utoipa::path(
    get,
    path = "/api/hr/employees/search",
    tag = "hr",
    params(SearchQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matching employees", body = inline(SuccessResponse<Vec<ProfileSummary>>)),
        (status = 403, description = "HR role required", body = ErrorResponse)
    )
)]
#[get("/api/hr/employees/search")]
pub async fn search_employees_handler(
    _hr: HrUser,
    query: web::Query<SearchQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.search_employees_use_case.execute(&query.q).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(err) => map_search_error(err),
    }
}
