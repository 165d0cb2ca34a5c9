use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    ChangeRoleRequest, GenerateTokenRequest, LoggedInUser, LoginRequest, LoginResponse,
    RegisterRequest, RegisterResponse, RegisteredUser, TokenValidity,
};
use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::use_cases::issue_registration_token::IssuedToken;
use crate::modules::auth::application::use_cases::login_user::LandingPage;
use crate::modules::documents::adapter::incoming::web::routes::DocumentReviewRequest;
use crate::modules::documents::application::domain::checklist::NextStep;
use crate::modules::documents::application::domain::entities::{
    Document, DocumentStatus, DocumentType,
};
use crate::modules::documents::application::use_cases::review_document::DocumentDecision;
use crate::modules::documents::application::use_cases::visa_status::VisaStatus;
use crate::modules::hr::application::ports::outgoing::DashboardCounts;
use crate::modules::hr::application::use_cases::visa_all::VisaEmployeeSummary;
use crate::modules::hr::application::use_cases::visa_in_progress::VisaProgressRow;
use crate::modules::onboarding::adapter::incoming::web::routes::ReviewRequest;
use crate::modules::onboarding::application::domain::draft::ProfileDraft;
use crate::modules::onboarding::application::domain::entities::{
    Address, EmergencyContact, ProfileStatus, Reference, ResidentType, ReviewAction, UserProfile,
    WorkAuthorization,
};
use crate::modules::onboarding::application::ports::outgoing::ProfileSummary;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Onboarding Backend API",
        version = "1.0.0",
        description = "Employee onboarding and visa document tracking API",
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::validate_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::generate_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::change_role_handler,

        // Onboarding endpoints
        crate::modules::onboarding::adapter::incoming::web::routes::my_profile_handler,
        crate::modules::onboarding::adapter::incoming::web::routes::submit_onboarding_handler,
        crate::modules::onboarding::adapter::incoming::web::routes::review_onboarding_handler,
        crate::modules::onboarding::adapter::incoming::web::routes::list_profiles_handler,
        crate::modules::onboarding::adapter::incoming::web::routes::search_employees_handler,

        // Document endpoints
        crate::modules::documents::adapter::incoming::web::routes::upload_document_handler,
        crate::modules::documents::adapter::incoming::web::routes::review_document_handler,
        crate::modules::documents::adapter::incoming::web::routes::visa_status_handler,
        crate::modules::documents::adapter::incoming::web::routes::download_document_handler,

        // HR dashboard endpoints
        crate::modules::hr::adapter::incoming::web::routes::dashboard_stats_handler,
        crate::modules::hr::adapter::incoming::web::routes::visa_in_progress_handler,
        crate::modules::hr::adapter::incoming::web::routes::visa_all_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequest,
            RegisterResponse,
            RegisteredUser,
            LoginRequest,
            LoginResponse,
            LoggedInUser,
            LandingPage,
            TokenValidity,
            GenerateTokenRequest,
            IssuedToken,
            ChangeRoleRequest,
            Role,

            // Onboarding DTOs
            ProfileDraft,
            UserProfile,
            ProfileStatus,
            ReviewAction,
            ResidentType,
            Address,
            WorkAuthorization,
            EmergencyContact,
            Reference,
            ReviewRequest,
            ProfileSummary,

            // Document DTOs
            Document,
            DocumentType,
            DocumentStatus,
            DocumentDecision,
            DocumentReviewRequest,
            NextStep,
            VisaStatus,

            // HR DTOs
            DashboardCounts,
            VisaProgressRow,
            VisaEmployeeSummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and session endpoints"),
        (name = "onboarding", description = "Onboarding application endpoints"),
        (name = "documents", description = "Visa document endpoints"),
        (name = "hr", description = "HR review and dashboard endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
