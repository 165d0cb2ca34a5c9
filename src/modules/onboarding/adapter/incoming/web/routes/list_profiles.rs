use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::onboarding::application::domain::entities::ProfileStatus;
use crate::modules::onboarding::application::ports::outgoing::ProfileSummary;
use crate::modules::onboarding::application::use_cases::list_profiles_by_status::ListProfilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, IntoParams)]
pub struct ListProfilesQuery {
    /// Status bucket: never_submitted, pending, approved or rejected
    pub status: String,
}

fn map_list_error(err: ListProfilesError) -> HttpResponse {
    match err {
        ListProfilesError::RepositoryError(msg) => {
            error!(error = %msg, "Profile listing repository error");
            ApiResponse::internal_error()
        }
    }
}

/// List onboarding applications by status (HR only)
#[utoipa::path(
    get,
    path = "/api/hr/profiles",
    tag = "hr",
    params(ListProfilesQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Applications in the requested bucket", body = inline(SuccessResponse<Vec<ProfileSummary>>)),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 403, description = "HR role required", body = ErrorResponse)
    )
)]
#[get("/api/hr/profiles")]
pub async fn list_profiles_handler(
    _hr: HrUser,
    query: web::Query<ListProfilesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let status = match ProfileStatus::parse(&query.status) {
        Some(s) => s,
        None => {
            return ApiResponse::bad_request(
                "INVALID_STATUS",
                "Status must be one of never_submitted, pending, approved, rejected",
            );
        }
    };

    match data.list_profiles_use_case.execute(status).await {
        Ok(rows) => ApiResponse::success(rows),
        Err(err) => map_list_error(err),
    }
}
