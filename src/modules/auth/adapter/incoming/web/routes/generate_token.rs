use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::auth::application::use_cases::issue_registration_token::{
    IssueTokenError, IssuedToken,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(serde::Serialize, Deserialize, ToSchema)]
pub struct GenerateTokenRequest {
    /// Email of the future hire
    #[schema(example = "newhire@example.com")]
    pub email: String,
}

fn map_issue_error(err: IssueTokenError, email: &str) -> HttpResponse {
    match &err {
        IssueTokenError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        IssueTokenError::DuplicateUser => {
            warn!(email = %email, "Invitation requested for existing account");
            ApiResponse::conflict("USER_EXISTS", "An account with this email already exists")
        }
        IssueTokenError::DuplicateToken => ApiResponse::conflict(
            "TOKEN_EXISTS",
            "A valid registration token already exists for this email",
        ),
        IssueTokenError::RepositoryError(msg) => {
            error!(email = %email, error = %msg, "Token issuance repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Issue a registration token and email the invitation (HR only)
#[utoipa::path(
    post,
    path = "/api/hr/registration-tokens",
    tag = "hr",
    request_body = GenerateTokenRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Invitation sent", body = inline(SuccessResponse<IssuedToken>)),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 403, description = "HR role required", body = ErrorResponse),
        (status = 409, description = "Account or open token already exists", body = ErrorResponse)
    )
)]
#[post("/api/hr/registration-tokens")]
pub async fn generate_token_handler(
    _hr: HrUser,
    req: web::Json<GenerateTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let email = req.into_inner().email;

    match data.issue_token_use_case.execute(email.clone()).await {
        Ok(issued) => ApiResponse::created(issued),
        Err(err) => map_issue_error(err, &email),
    }
}
