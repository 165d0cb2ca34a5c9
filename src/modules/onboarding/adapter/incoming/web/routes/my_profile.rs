use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::onboarding::application::domain::entities::UserProfile;
use crate::modules::onboarding::application::use_cases::fetch_my_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_fetch_error(err: FetchProfileError) -> HttpResponse {
    match err {
        FetchProfileError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        FetchProfileError::RepositoryError(msg) => {
            error!(error = %msg, "Profile fetch repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch the caller's onboarding profile
#[utoipa::path(
    get,
    path = "/api/onboarding/my-profile",
    tag = "onboarding",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's profile", body = UserProfile),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "No profile for this account", body = ErrorResponse)
    )
)]
#[get("/api/onboarding/my-profile")]
pub async fn my_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_my_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_fetch_error(err),
    }
}
