use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_user::{LandingPage, LoginError};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Account email; the username also works.
    #[schema(example = "newhire@example.com")]
    pub email: String,

    #[schema(example = "SecurePass1")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    token: String,
    user: LoggedInUser,
    /// Where the frontend should send the user next
    landing_page: LandingPage,
}

#[derive(Serialize, ToSchema)]
pub struct LoggedInUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "newhire")]
    username: String,
    #[schema(example = "newhire@example.com")]
    email: String,
    #[schema(example = "employee")]
    role: String,
}

fn map_login_error(err: LoginError, email: &str) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!(email = %email, "Failed login attempt");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::RepositoryError(msg) => {
            error!(email = %email, error = %msg, "Login repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .login_user_use_case
        .execute(&req.email, &req.password)
        .await
    {
        Ok(out) => ApiResponse::success(LoginResponse {
            token: out.session_token,
            landing_page: out.landing_page,
            user: LoggedInUser {
                id: out.user.id.to_string(),
                username: out.user.username,
                email: out.user.email,
                role: out.user.role.as_str().to_string(),
            },
        }),
        Err(err) => map_login_error(err, &req.email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{Role, User};
    use crate::modules::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginOutput};
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    struct StubLogin {
        result: Result<LandingPage, ()>,
    }

    #[async_trait]
    impl ILoginUserUseCase for StubLogin {
        async fn execute(
            &self,
            identifier: &str,
            _password: &str,
        ) -> Result<LoginOutput, LoginError> {
            match self.result {
                Ok(landing_page) => Ok(LoginOutput {
                    user: User {
                        id: Uuid::new_v4(),
                        username: "ada".to_string(),
                        email: identifier.to_string(),
                        password_hash: "hash".to_string(),
                        role: Role::Employee,
                        first_name: None,
                        last_name: None,
                        created_at: Utc::now(),
                        updated_at: Utc::now(),
                    },
                    session_token: "jwt".to_string(),
                    landing_page,
                }),
                Err(()) => Err(LoginError::InvalidCredentials),
            }
        }
    }

    #[actix_web::test]
    async fn test_login_success_returns_landing_page() {
        let state = TestAppStateBuilder::new()
            .with_login_user(Arc::new(StubLogin {
                result: Ok(LandingPage::Onboarding),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({"email": "ada@x.com", "password": "pw"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["landing_page"], "onboarding");
        assert_eq!(body["data"]["token"], "jwt");
    }

    #[actix_web::test]
    async fn test_login_bad_credentials_is_401() {
        let state = TestAppStateBuilder::new()
            .with_login_user(Arc::new(StubLogin { result: Err(()) }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new(state))
                .service(login_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({"email": "ada@x.com", "password": "nope"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }
}
