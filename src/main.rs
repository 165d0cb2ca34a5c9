pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::modules::auth::adapter::outgoing::registration_token_repository_postgres::RegistrationTokenRepositoryPostgres;
use crate::modules::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::modules::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;
use crate::modules::auth::application::services::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::use_cases::{
    change_user_role::{ChangeUserRoleUseCase, IChangeUserRoleUseCase},
    issue_registration_token::{IIssueRegistrationTokenUseCase, IssueRegistrationTokenUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    validate_registration_token::{
        IValidateRegistrationTokenUseCase, ValidateRegistrationTokenUseCase,
    },
};

use crate::modules::documents::adapter::outgoing::{DocumentRepositoryPostgres, GcsBlobStore};
use crate::modules::documents::application::domain::policies::UploadPolicy;
use crate::modules::documents::application::ports::outgoing::{BlobStore, DocumentRepository};
use crate::modules::documents::application::use_cases::{
    download_document::{DownloadDocumentUseCase, IDownloadDocumentUseCase},
    review_document::{IReviewDocumentUseCase, ReviewDocumentUseCase},
    upload_document::{IUploadDocumentUseCase, UploadDocumentUseCase},
    visa_status::{IVisaStatusUseCase, VisaStatusUseCase},
};

use crate::modules::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};
use crate::modules::email::application::services::UserEmailService;

use crate::modules::hr::adapter::outgoing::HrQueryPostgres;
use crate::modules::hr::application::use_cases::{
    dashboard_stats::{DashboardStatsUseCase, IDashboardStatsUseCase},
    visa_all::{IVisaAllUseCase, VisaAllUseCase},
    visa_in_progress::{IVisaInProgressUseCase, VisaInProgressUseCase},
};

use crate::modules::onboarding::adapter::outgoing::profile_query_postgres::ProfileQueryPostgres;
use crate::modules::onboarding::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::modules::onboarding::application::ports::outgoing::ProfileQuery;
use crate::modules::onboarding::application::use_cases::{
    fetch_my_profile::{FetchMyProfileUseCase, IFetchMyProfileUseCase},
    list_profiles_by_status::{IListProfilesByStatusUseCase, ListProfilesByStatusUseCase},
    review_onboarding::{IReviewOnboardingUseCase, ReviewOnboardingUseCase},
    search_employees::{ISearchEmployeesUseCase, SearchEmployeesUseCase},
    submit_onboarding::{ISubmitOnboardingUseCase, SubmitOnboardingUseCase},
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub validate_token_use_case: Arc<dyn IValidateRegistrationTokenUseCase + Send + Sync>,
    pub issue_token_use_case: Arc<dyn IIssueRegistrationTokenUseCase + Send + Sync>,
    pub change_role_use_case: Arc<dyn IChangeUserRoleUseCase + Send + Sync>,
    pub fetch_my_profile_use_case: Arc<dyn IFetchMyProfileUseCase + Send + Sync>,
    pub submit_onboarding_use_case: Arc<dyn ISubmitOnboardingUseCase + Send + Sync>,
    pub review_onboarding_use_case: Arc<dyn IReviewOnboardingUseCase + Send + Sync>,
    pub list_profiles_use_case: Arc<dyn IListProfilesByStatusUseCase + Send + Sync>,
    pub search_employees_use_case: Arc<dyn ISearchEmployeesUseCase + Send + Sync>,
    pub upload_document_use_case: Arc<dyn IUploadDocumentUseCase + Send + Sync>,
    pub review_document_use_case: Arc<dyn IReviewDocumentUseCase + Send + Sync>,
    pub visa_status_use_case: Arc<dyn IVisaStatusUseCase + Send + Sync>,
    pub download_document_use_case: Arc<dyn IDownloadDocumentUseCase + Send + Sync>,
    pub dashboard_stats_use_case: Arc<dyn IDashboardStatsUseCase + Send + Sync>,
    pub visa_in_progress_use_case: Arc<dyn IVisaInProgressUseCase + Send + Sync>,
    pub visa_all_use_case: Arc<dyn IVisaAllUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // SMTP SETUPS
    let from_email = std::env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if std::env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&host, port, &from_email)
    } else {
        // Production SMTP
        let smtp_server = std::env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    // Links in outbound mail point at the frontend, not this server
    let app_url = env::var("APP_URL").unwrap_or_else(|_| format!("http://{server_url}"));

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let token_repo = RegistrationTokenRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let document_repo = DocumentRepositoryPostgres::new(Arc::clone(&db_arc));
    let hr_query = HrQueryPostgres::new(Arc::clone(&db_arc));

    let upload_policy = UploadPolicy::from_env();
    let blob_store = GcsBlobStore::new(upload_policy.bucket_name.clone());

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let argon2_password_hasher =
        Argon2Hasher::from_env().expect("Invalid Argon2 parameters in environment");

    let email_sender: Arc<dyn EmailSender> = Arc::new(smtp_sender);
    let email_notifier: Arc<dyn UserEmailNotifier> =
        Arc::new(UserEmailService::new(email_sender, app_url));

    let profile_query_arc: Arc<dyn ProfileQuery + Send + Sync> = Arc::new(profile_query.clone());
    let document_repo_arc: Arc<dyn DocumentRepository + Send + Sync> =
        Arc::new(document_repo.clone());
    let user_query_arc: Arc<dyn UserQuery + Send + Sync> = Arc::new(user_query.clone());

    // Auth use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        token_repo.clone(),
        Arc::new(profile_repo.clone()),
        Arc::new(argon2_password_hasher.clone()),
        Arc::new(jwt_service.clone()),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&profile_query_arc),
        Arc::new(argon2_password_hasher),
        Arc::new(jwt_service.clone()),
    );
    let validate_token_use_case = ValidateRegistrationTokenUseCase::new(token_repo.clone());
    let issue_token_use_case = IssueRegistrationTokenUseCase::new(
        user_query.clone(),
        token_repo,
        Arc::clone(&email_notifier),
    );
    let change_role_use_case = ChangeUserRoleUseCase::new(user_query, user_repo);

    // Onboarding use cases
    let fetch_my_profile_use_case = FetchMyProfileUseCase::new(profile_query.clone());
    let submit_onboarding_use_case =
        SubmitOnboardingUseCase::new(profile_query.clone(), profile_repo.clone());
    let review_onboarding_use_case = ReviewOnboardingUseCase::new(
        profile_query.clone(),
        profile_repo,
        Arc::clone(&document_repo_arc),
        Arc::clone(&email_notifier),
    );
    let list_profiles_use_case = ListProfilesByStatusUseCase::new(profile_query.clone());
    let search_employees_use_case = SearchEmployeesUseCase::new(profile_query);

    // Document use cases
    let upload_document_use_case = UploadDocumentUseCase::new(
        document_repo.clone(),
        Arc::clone(&profile_query_arc),
        Arc::new(blob_store.clone()) as Arc<dyn BlobStore>,
        upload_policy,
    );
    let review_document_use_case = ReviewDocumentUseCase::new(
        document_repo.clone(),
        user_query_arc,
        Arc::clone(&email_notifier),
    );
    let visa_status_use_case =
        VisaStatusUseCase::new(document_repo.clone(), Arc::clone(&profile_query_arc));
    let download_document_use_case = DownloadDocumentUseCase::new(document_repo, blob_store);

    // HR dashboard use cases
    let dashboard_stats_use_case = DashboardStatsUseCase::new(hr_query.clone());
    let visa_in_progress_use_case = VisaInProgressUseCase::new(hr_query.clone());
    let visa_all_use_case = VisaAllUseCase::new(hr_query);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        validate_token_use_case: Arc::new(validate_token_use_case),
        issue_token_use_case: Arc::new(issue_token_use_case),
        change_role_use_case: Arc::new(change_role_use_case),
        fetch_my_profile_use_case: Arc::new(fetch_my_profile_use_case),
        submit_onboarding_use_case: Arc::new(submit_onboarding_use_case),
        review_onboarding_use_case: Arc::new(review_onboarding_use_case),
        list_profiles_use_case: Arc::new(list_profiles_use_case),
        search_employees_use_case: Arc::new(search_employees_use_case),
        upload_document_use_case: Arc::new(upload_document_use_case),
        review_document_use_case: Arc::new(review_document_use_case),
        visa_status_use_case: Arc::new(visa_status_use_case),
        download_document_use_case: Arc::new(download_document_use_case),
        dashboard_stats_use_case: Arc::new(dashboard_stats_use_case),
        visa_in_progress_use_case: Arc::new(visa_in_progress_use_case),
        visa_all_use_case: Arc::new(visa_all_use_case),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            // Uploads arrive as a raw body; the policy caps them at 5 MiB
            .app_data(web::PayloadConfig::new(10 * 1024 * 1024))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::validate_token_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::generate_token_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::change_role_handler);
    // Onboarding
    cfg.service(crate::modules::onboarding::adapter::incoming::web::routes::my_profile_handler);
    cfg.service(
        crate::modules::onboarding::adapter::incoming::web::routes::submit_onboarding_handler,
    );
    cfg.service(
        crate::modules::onboarding::adapter::incoming::web::routes::review_onboarding_handler,
    );
    cfg.service(crate::modules::onboarding::adapter::incoming::web::routes::list_profiles_handler);
    cfg.service(
        crate::modules::onboarding::adapter::incoming::web::routes::search_employees_handler,
    );
    // Documents
    cfg.service(crate::modules::documents::adapter::incoming::web::routes::upload_document_handler);
    cfg.service(crate::modules::documents::adapter::incoming::web::routes::review_document_handler);
    cfg.service(crate::modules::documents::adapter::incoming::web::routes::visa_status_handler);
    cfg.service(
        crate::modules::documents::adapter::incoming::web::routes::download_document_handler,
    );
    // HR dashboard
    cfg.service(crate::modules::hr::adapter::incoming::web::routes::dashboard_stats_handler);
    cfg.service(crate::modules::hr::adapter::incoming::web::routes::visa_in_progress_handler);
    cfg.service(crate::modules::hr::adapter::incoming::web::routes::visa_all_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
