use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::validate_registration_token::ValidateTokenError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct TokenValidity {
    /// Email the token was issued for
    #[schema(example = "newhire@example.com")]
    email: String,
}

fn map_validate_error(err: ValidateTokenError) -> HttpResponse {
    match err {
        ValidateTokenError::InvalidOrExpired => ApiResponse::bad_request(
            "INVALID_TOKEN",
            "Invalid or expired registration token",
        ),
        ValidateTokenError::RepositoryError(msg) => {
            error!(error = %msg, "Token validation repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Check a registration token before showing the signup form
///
/// Read-only: the token stays open until an account is actually created.
#[utoipa::path(
    get,
    path = "/api/auth/validate-token/{secret}",
    tag = "auth",
    params(("secret" = String, Path, description = "Raw token secret from the invitation email")),
    responses(
        (status = 200, description = "Token is valid", body = inline(SuccessResponse<TokenValidity>)),
        (status = 400, description = "Invalid or expired token", body = ErrorResponse)
    )
)]
#[get("/api/auth/validate-token/{secret}")]
pub async fn validate_token_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let secret = path.into_inner();

    match data.validate_token_use_case.execute(&secret).await {
        Ok(email) => ApiResponse::success(TokenValidity { email }),
        Err(err) => map_validate_error(err),
    }
}
