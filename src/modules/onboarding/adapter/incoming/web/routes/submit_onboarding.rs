use actix_web::{put, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::onboarding::application::domain::draft::ProfileDraft;
use crate::modules::onboarding::application::domain::entities::UserProfile;
use crate::modules::onboarding::application::use_cases::submit_onboarding::SubmitOnboardingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_submit_error(err: SubmitOnboardingError) -> HttpResponse {
    match &err {
        SubmitOnboardingError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        SubmitOnboardingError::NotEditable => ApiResponse::conflict(
            "NOT_EDITABLE",
            "Application cannot be edited in its current state",
        ),
        SubmitOnboardingError::Validation(v) => {
            warn!(error = %v, "Onboarding submission failed validation");
            ApiResponse::bad_request("VALIDATION_FAILED", &v.to_string())
        }
        SubmitOnboardingError::RepositoryError(msg) => {
            error!(error = %msg, "Onboarding submission repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Submit or resubmit the onboarding application
///
/// Allowed while the application has never been submitted or after a
/// rejection. Submitting replaces the stored draft wholesale and moves the
/// application to pending review.
#[utoipa::path(
    put,
    path = "/api/onboarding",
    tag = "onboarding",
    request_body = ProfileDraft,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Application now pending review", body = UserProfile),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "Application is frozen", body = ErrorResponse)
    )
)]
#[put("/api/onboarding")]
pub async fn submit_onboarding_handler(
    user: AuthenticatedUser,
    req: web::Json<ProfileDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .submit_onboarding_use_case
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_submit_error(err),
    }
}
