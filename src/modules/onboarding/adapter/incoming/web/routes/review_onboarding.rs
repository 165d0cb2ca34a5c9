use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::onboarding::application::domain::entities::ReviewAction;
use crate::modules::onboarding::application::use_cases::review_onboarding::ReviewOnboardingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(serde::Serialize, Deserialize, ToSchema)]
pub struct ReviewRequest {
    /// "approve" or "reject"
    pub action: ReviewAction,

    /// Required when rejecting
    #[schema(example = "SSN is missing a digit")]
    pub feedback: Option<String>,
}

fn map_review_error(err: ReviewOnboardingError) -> HttpResponse {
    match err {
        ReviewOnboardingError::ProfileNotFound => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Profile not found")
        }
        ReviewOnboardingError::NotPending => ApiResponse::conflict(
            "NOT_PENDING",
            "Only pending applications can be reviewed",
        ),
        ReviewOnboardingError::FeedbackRequired => {
            ApiResponse::bad_request("FEEDBACK_REQUIRED", "Feedback is required when rejecting")
        }
        ReviewOnboardingError::RepositoryError(msg) => {
            error!(error = %msg, "Onboarding review repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Approve or reject a pending onboarding application (HR only)
#[utoipa::path(
    post,
    path = "/api/hr/profiles/{profile_id}/review",
    tag = "hr",
    params(("profile_id" = Uuid, Path, description = "Profile to review")),
    request_body = ReviewRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Decision recorded"),
        (status = 400, description = "Feedback missing on rejection", body = ErrorResponse),
        (status = 403, description = "HR role required", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 409, description = "Application is not pending", body = ErrorResponse)
    )
)]
#[post("/api/hr/profiles/{profile_id}/review")]
pub async fn review_onboarding_handler(
    _hr: HrUser,
    path: web::Path<Uuid>,
    req: web::Json<ReviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data
        .review_onboarding_use_case
        .execute(path.into_inner(), req.action, req.feedback)
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({
            "message": "Decision recorded"
        })),
        Err(err) => map_review_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::onboarding::application::use_cases::review_onboarding::IReviewOnboardingUseCase;
    use crate::tests::support::{test_token_provider, TestAppStateBuilder};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubReview {
        result: Result<(), ReviewOnboardingError>,
    }

    #[async_trait]
    impl IReviewOnboardingUseCase for StubReview {
        async fn execute(
            &self,
            _profile_id: Uuid,
            _action: ReviewAction,
            _feedback: Option<String>,
        ) -> Result<(), ReviewOnboardingError> {
            match &self.result {
                Ok(()) => Ok(()),
                Err(ReviewOnboardingError::FeedbackRequired) => {
                    Err(ReviewOnboardingError::FeedbackRequired)
                }
                Err(ReviewOnboardingError::NotPending) => Err(ReviewOnboardingError::NotPending),
                Err(ReviewOnboardingError::ProfileNotFound) => {
                    Err(ReviewOnboardingError::ProfileNotFound)
                }
                Err(ReviewOnboardingError::RepositoryError(m)) => {
                    Err(ReviewOnboardingError::RepositoryError(m.clone()))
                }
            }
        }
    }

    #[actix_web::test]
    async fn test_review_requires_hr_token() {
        let (provider, _hr_token, employee_token) = test_token_provider();

        let state = TestAppStateBuilder::new()
            .with_review_onboarding(Arc::new(StubReview { result: Ok(()) }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .app_data(actix_web::web::Data::new(provider))
                .service(review_onboarding_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/hr/profiles/{}/review", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", employee_token)))
            .set_json(serde_json::json!({"action": "approve"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn test_review_approve_with_hr_token() {
        let (provider, hr_token, _employee_token) = test_token_provider();

        let state = TestAppStateBuilder::new()
            .with_review_onboarding(Arc::new(StubReview { result: Ok(()) }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .app_data(actix_web::web::Data::new(provider))
                .service(review_onboarding_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/hr/profiles/{}/review", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", hr_token)))
            .set_json(serde_json::json!({"action": "approve"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_review_missing_feedback_is_400() {
        let (provider, hr_token, _employee_token) = test_token_provider();

        let state = TestAppStateBuilder::new()
            .with_review_onboarding(Arc::new(StubReview {
                result: Err(ReviewOnboardingError::FeedbackRequired),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .app_data(actix_web::web::Data::new(provider))
                .service(review_onboarding_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/hr/profiles/{}/review", Uuid::new_v4()))
            .insert_header(("Authorization", format!("Bearer {}", hr_token)))
            .set_json(serde_json::json!({"action": "reject"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "FEEDBACK_REQUIRED");
    }
}
