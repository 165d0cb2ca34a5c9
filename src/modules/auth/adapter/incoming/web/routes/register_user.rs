use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for token-gated signup
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Raw registration token secret from the invitation email
    #[schema(example = "3f7a9c...")]
    pub token: String,

    /// Email address, must match the invitation
    #[schema(example = "newhire@example.com")]
    pub email: String,

    /// Username (3-30 characters, unique)
    #[schema(example = "newhire")]
    pub username: String,

    /// Password (minimum 6 characters)
    #[schema(example = "SecurePass1")]
    pub password: String,

    #[schema(example = "Ada")]
    pub first_name: Option<String>,

    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Session token for the new account
    token: String,
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "newhire")]
    username: String,
    #[schema(example = "newhire@example.com")]
    email: String,
    #[schema(example = "employee")]
    role: String,
}

fn map_register_error(err: RegisterUserError, email: &str) -> HttpResponse {
    match &err {
        RegisterUserError::InvalidToken => {
            warn!(email = %email, "Registration with invalid token");
            ApiResponse::bad_request("INVALID_TOKEN", "Invalid or expired registration token")
        }
        RegisterUserError::EmailMismatch => {
            warn!(email = %email, "Registration email does not match invitation");
            ApiResponse::bad_request("EMAIL_MISMATCH", "Email does not match the invitation")
        }
        RegisterUserError::InvalidUsernameLength => ApiResponse::bad_request(
            "INVALID_USERNAME",
            "Username must be between 3 and 30 characters",
        ),
        RegisterUserError::WeakPassword => {
            ApiResponse::bad_request("WEAK_PASSWORD", "Password must be at least 6 characters")
        }
        RegisterUserError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        RegisterUserError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        RegisterUserError::EmailTaken => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }
        other => {
            error!(email = %email, error = %other, "Unhandled registration error");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new employee account
///
/// Signup is gated on a single-use registration token issued by HR. The
/// email must match the one the token was issued for.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Invalid input or token", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse)
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let email = req.email.clone();

    let input = RegisterUserInput {
        token: req.token,
        email: req.email,
        username: req.username,
        password: req.password,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    match data.register_user_use_case.execute(input).await {
        Ok(out) => ApiResponse::created(RegisterResponse {
            token: out.session_token,
            user: RegisteredUser {
                id: out.user.id.to_string(),
                username: out.user.username,
                email: out.user.email,
                role: out.user.role.as_str().to_string(),
            },
        }),
        Err(err) => map_register_error(err, &email),
    }
}
