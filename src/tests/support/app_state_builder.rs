use std::sync::Arc;

use crate::modules::auth::application::use_cases::change_user_role::IChangeUserRoleUseCase;
use crate::modules::auth::application::use_cases::issue_registration_token::IIssueRegistrationTokenUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::auth::application::use_cases::validate_registration_token::IValidateRegistrationTokenUseCase;
use crate::modules::documents::application::use_cases::download_document::IDownloadDocumentUseCase;
use crate::modules::documents::application::use_cases::review_document::IReviewDocumentUseCase;
use crate::modules::documents::application::use_cases::upload_document::IUploadDocumentUseCase;
use crate::modules::documents::application::use_cases::visa_status::IVisaStatusUseCase;
use crate::modules::hr::application::use_cases::dashboard_stats::IDashboardStatsUseCase;
use crate::modules::hr::application::use_cases::visa_all::IVisaAllUseCase;
use crate::modules::hr::application::use_cases::visa_in_progress::IVisaInProgressUseCase;
use crate::modules::onboarding::application::use_cases::fetch_my_profile::IFetchMyProfileUseCase;
use crate::modules::onboarding::application::use_cases::list_profiles_by_status::IListProfilesByStatusUseCase;
use crate::modules::onboarding::application::use_cases::review_onboarding::IReviewOnboardingUseCase;
use crate::modules::onboarding::application::use_cases::search_employees::ISearchEmployeesUseCase;
use crate::modules::onboarding::application::use_cases::submit_onboarding::ISubmitOnboardingUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an AppState where every use case is a stub; a test swaps in only
/// the one it exercises.
pub struct TestAppStateBuilder {
    register_user: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_user: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    validate_token: Option<Arc<dyn IValidateRegistrationTokenUseCase + Send + Sync>>,
    issue_token: Option<Arc<dyn IIssueRegistrationTokenUseCase + Send + Sync>>,
    change_role: Option<Arc<dyn IChangeUserRoleUseCase + Send + Sync>>,
    fetch_my_profile: Option<Arc<dyn IFetchMyProfileUseCase + Send + Sync>>,
    submit_onboarding: Option<Arc<dyn ISubmitOnboardingUseCase + Send + Sync>>,
    review_onboarding: Option<Arc<dyn IReviewOnboardingUseCase + Send + Sync>>,
    list_profiles: Option<Arc<dyn IListProfilesByStatusUseCase + Send + Sync>>,
    search_employees: Option<Arc<dyn ISearchEmployeesUseCase + Send + Sync>>,
    upload_document: Option<Arc<dyn IUploadDocumentUseCase + Send + Sync>>,
    review_document: Option<Arc<dyn IReviewDocumentUseCase + Send + Sync>>,
    visa_status: Option<Arc<dyn IVisaStatusUseCase + Send + Sync>>,
    download_document: Option<Arc<dyn IDownloadDocumentUseCase + Send + Sync>>,
    dashboard_stats: Option<Arc<dyn IDashboardStatsUseCase + Send + Sync>>,
    visa_in_progress: Option<Arc<dyn IVisaInProgressUseCase + Send + Sync>>,
    visa_all: Option<Arc<dyn IVisaAllUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Some(Arc::new(StubRegisterUserUseCase)),
            login_user: Some(Arc::new(StubLoginUserUseCase)),
            validate_token: Some(Arc::new(StubValidateTokenUseCase)),
            issue_token: Some(Arc::new(StubIssueTokenUseCase)),
            change_role: Some(Arc::new(StubChangeRoleUseCase)),
            fetch_my_profile: Some(Arc::new(StubFetchMyProfileUseCase)),
            submit_onboarding: Some(Arc::new(StubSubmitOnboardingUseCase)),
            review_onboarding: Some(Arc::new(StubReviewOnboardingUseCase)),
            list_profiles: Some(Arc::new(StubListProfilesUseCase)),
            search_employees: Some(Arc::new(StubSearchEmployeesUseCase)),
            upload_document: Some(Arc::new(StubUploadDocumentUseCase)),
            review_document: Some(Arc::new(StubReviewDocumentUseCase)),
            visa_status: Some(Arc::new(StubVisaStatusUseCase)),
            download_document: Some(Arc::new(StubDownloadDocumentUseCase)),
            dashboard_stats: Some(Arc::new(StubDashboardStatsUseCase)),
            visa_in_progress: Some(Arc::new(StubVisaInProgressUseCase)),
            visa_all: Some(Arc::new(StubVisaAllUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_register_user(mut self, uc: Arc<dyn IRegisterUserUseCase + Send + Sync>) -> Self {
        self.register_user = Some(uc);
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn ILoginUserUseCase + Send + Sync>) -> Self {
        self.login_user = Some(uc);
        self
    }

    pub fn with_validate_token(
        mut self,
        uc: Arc<dyn IValidateRegistrationTokenUseCase + Send + Sync>,
    ) -> Self {
        self.validate_token = Some(uc);
        self
    }

    pub fn with_issue_token(
        mut self,
        uc: Arc<dyn IIssueRegistrationTokenUseCase + Send + Sync>,
    ) -> Self {
        self.issue_token = Some(uc);
        self
    }

    pub fn with_change_role(mut self, uc: Arc<dyn IChangeUserRoleUseCase + Send + Sync>) -> Self {
        self.change_role = Some(uc);
        self
    }

    pub fn with_fetch_my_profile(
        mut self,
        uc: Arc<dyn IFetchMyProfileUseCase + Send + Sync>,
    ) -> Self {
        self.fetch_my_profile = Some(uc);
        self
    }

    pub fn with_submit_onboarding(
        mut self,
        uc: Arc<dyn ISubmitOnboardingUseCase + Send + Sync>,
    ) -> Self {
        self.submit_onboarding = Some(uc);
        self
    }

    pub fn with_review_onboarding(
        mut self,
        uc: Arc<dyn IReviewOnboardingUseCase + Send + Sync>,
    ) -> Self {
        self.review_onboarding = Some(uc);
        self
    }

    pub fn with_list_profiles(
        mut self,
        uc: Arc<dyn IListProfilesByStatusUseCase + Send + Sync>,
    ) -> Self {
        self.list_profiles = Some(uc);
        self
    }

    pub fn with_search_employees(
        mut self,
        uc: Arc<dyn ISearchEmployeesUseCase + Send + Sync>,
    ) -> Self {
        self.search_employees = Some(uc);
        self
    }

    pub fn with_upload_document(
        mut self,
        uc: Arc<dyn IUploadDocumentUseCase + Send + Sync>,
    ) -> Self {
        self.upload_document = Some(uc);
        self
    }

    pub fn with_review_document(
        mut self,
        uc: Arc<dyn IReviewDocumentUseCase + Send + Sync>,
    ) -> Self {
        self.review_document = Some(uc);
        self
    }

    pub fn with_visa_status(mut self, uc: Arc<dyn IVisaStatusUseCase + Send + Sync>) -> Self {
        self.visa_status = Some(uc);
        self
    }

    pub fn with_download_document(
        mut self,
        uc: Arc<dyn IDownloadDocumentUseCase + Send + Sync>,
    ) -> Self {
        self.download_document = Some(uc);
        self
    }

    pub fn with_dashboard_stats(
        mut self,
        uc: Arc<dyn IDashboardStatsUseCase + Send + Sync>,
    ) -> Self {
        self.dashboard_stats = Some(uc);
        self
    }

    pub fn with_visa_in_progress(
        mut self,
        uc: Arc<dyn IVisaInProgressUseCase + Send + Sync>,
    ) -> Self {
        self.visa_in_progress = Some(uc);
        self
    }

    pub fn with_visa_all(mut self, uc: Arc<dyn IVisaAllUseCase + Send + Sync>) -> Self {
        self.visa_all = Some(uc);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            register_user_use_case: self.register_user.unwrap(),
            login_user_use_case: self.login_user.unwrap(),
            validate_token_use_case: self.validate_token.unwrap(),
            issue_token_use_case: self.issue_token.unwrap(),
            change_role_use_case: self.change_role.unwrap(),
            fetch_my_profile_use_case: self.fetch_my_profile.unwrap(),
            submit_onboarding_use_case: self.submit_onboarding.unwrap(),
            review_onboarding_use_case: self.review_onboarding.unwrap(),
            list_profiles_use_case: self.list_profiles.unwrap(),
            search_employees_use_case: self.search_employees.unwrap(),
            upload_document_use_case: self.upload_document.unwrap(),
            review_document_use_case: self.review_document.unwrap(),
            visa_status_use_case: self.visa_status.unwrap(),
            download_document_use_case: self.download_document.unwrap(),
            dashboard_stats_use_case: self.dashboard_stats.unwrap(),
            visa_in_progress_use_case: self.visa_in_progress.unwrap(),
            visa_all_use_case: self.visa_all.unwrap(),
        }
    }
}
