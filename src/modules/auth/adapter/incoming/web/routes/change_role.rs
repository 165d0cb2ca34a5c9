use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::HrUser;
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::use_cases::change_user_role::ChangeRoleError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(serde::Serialize, Deserialize, ToSchema)]
pub struct ChangeRoleRequest {
    /// New role, "employee" or "hr"
    #[schema(example = "hr")]
    pub role: Role,
}

fn map_change_role_error(err: ChangeRoleError) -> HttpResponse {
    match err {
        ChangeRoleError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        ChangeRoleError::CannotChangeOwnRole => {
            ApiResponse::bad_request("OWN_ROLE", "Cannot change your own role")
        }
        ChangeRoleError::RepositoryError(msg) => {
            error!(error = %msg, "Role change repository error");
            ApiResponse::internal_error()
        }
    }
}

/// Change another user's role (HR only)
#[utoipa::path(
    patch,
    path = "/api/hr/users/{user_id}/role",
    tag = "hr",
    params(("user_id" = Uuid, Path, description = "Target user id")),
    request_body = ChangeRoleRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Role updated"),
        (status = 400, description = "Cannot change own role", body = ErrorResponse),
        (status = 403, description = "HR role required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[patch("/api/hr/users/{user_id}/role")]
pub async fn change_role_handler(
    hr: HrUser,
    path: web::Path<Uuid>,
    req: web::Json<ChangeRoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target_id = path.into_inner();

    match data
        .change_role_use_case
        .execute(hr.user_id, target_id, req.role)
        .await
    {
        Ok(()) => ApiResponse::success(serde_json::json!({
            "message": "Role updated"
        })),
        Err(err) => map_change_role_error(err),
    }
}
