//! Default stand-ins for every use case in AppState. Each one fails (or
//! returns the emptiest possible value) so a route test only has to swap in
//! the single use case it actually exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Role;
use crate::modules::auth::application::use_cases::change_user_role::{
    ChangeRoleError, IChangeUserRoleUseCase,
};
use crate::modules::auth::application::use_cases::issue_registration_token::{
    IIssueRegistrationTokenUseCase, IssueTokenError, IssuedToken,
};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginOutput,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterUserError, RegisterUserInput, RegisterUserOutput,
};
use crate::modules::auth::application::use_cases::validate_registration_token::{
    IValidateRegistrationTokenUseCase, ValidateTokenError,
};
use crate::modules::documents::application::use_cases::download_document::{
    DownloadDocumentError, DownloadedFile, IDownloadDocumentUseCase,
};
use crate::modules::documents::application::use_cases::review_document::{
    DocumentDecision, IReviewDocumentUseCase, ReviewDocumentError,
};
use crate::modules::documents::application::use_cases::upload_document::{
    IUploadDocumentUseCase, UploadDocumentError, UploadInput,
};
use crate::modules::documents::application::domain::entities::Document;
use crate::modules::documents::application::use_cases::visa_status::{
    IVisaStatusUseCase, VisaStatus, VisaStatusError,
};
use crate::modules::hr::application::ports::outgoing::DashboardCounts;
use crate::modules::hr::application::use_cases::dashboard_stats::{
    DashboardStatsError, IDashboardStatsUseCase,
};
use crate::modules::hr::application::use_cases::visa_all::{
    IVisaAllUseCase, VisaAllError, VisaEmployeeSummary,
};
use crate::modules::hr::application::use_cases::visa_in_progress::{
    IVisaInProgressUseCase, VisaInProgressError, VisaProgressRow,
};
use crate::modules::onboarding::application::domain::draft::ProfileDraft;
use crate::modules::onboarding::application::domain::entities::{
    ProfileStatus, ReviewAction, UserProfile,
};
use crate::modules::onboarding::application::ports::outgoing::ProfileSummary;
use crate::modules::onboarding::application::use_cases::fetch_my_profile::{
    FetchProfileError, IFetchMyProfileUseCase,
};
use crate::modules::onboarding::application::use_cases::list_profiles_by_status::{
    IListProfilesByStatusUseCase, ListProfilesError,
};
use crate::modules::onboarding::application::use_cases::review_onboarding::{
    IReviewOnboardingUseCase, ReviewOnboardingError,
};
use crate::modules::onboarding::application::use_cases::search_employees::{
    ISearchEmployeesUseCase, SearchEmployeesError,
};
use crate::modules::onboarding::application::use_cases::submit_onboarding::{
    ISubmitOnboardingUseCase, SubmitOnboardingError,
};

const NOT_WIRED: &str = "not wired in this test";

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _identifier: &str, _password: &str) -> Result<LoginOutput, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

pub struct StubValidateTokenUseCase;

#[async_trait]
impl IValidateRegistrationTokenUseCase for StubValidateTokenUseCase {
    async fn execute(&self, _secret: &str) -> Result<String, ValidateTokenError> {
        Err(ValidateTokenError::InvalidOrExpired)
    }
}

pub struct StubIssueTokenUseCase;

#[async_trait]
impl IIssueRegistrationTokenUseCase for StubIssueTokenUseCase {
    async fn execute(&self, _email: String) -> Result<IssuedToken, IssueTokenError> {
        Err(IssueTokenError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubChangeRoleUseCase;

#[async_trait]
impl IChangeUserRoleUseCase for StubChangeRoleUseCase {
    async fn execute(
        &self,
        _actor_id: Uuid,
        _target_id: Uuid,
        _role: Role,
    ) -> Result<(), ChangeRoleError> {
        Err(ChangeRoleError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubFetchMyProfileUseCase;

#[async_trait]
impl IFetchMyProfileUseCase for StubFetchMyProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        Err(FetchProfileError::ProfileNotFound)
    }
}

pub struct StubSubmitOnboardingUseCase;

#[async_trait]
impl ISubmitOnboardingUseCase for StubSubmitOnboardingUseCase {
    async fn execute(
        &self,
        _user_id: Uuid,
        _draft: ProfileDraft,
    ) -> Result<UserProfile, SubmitOnboardingError> {
        Err(SubmitOnboardingError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubReviewOnboardingUseCase;

#[async_trait]
impl IReviewOnboardingUseCase for StubReviewOnboardingUseCase {
    async fn execute(
        &self,
        _profile_id: Uuid,
        _action: ReviewAction,
        _feedback: Option<String>,
    ) -> Result<(), ReviewOnboardingError> {
        Err(ReviewOnboardingError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubListProfilesUseCase;

#[async_trait]
impl IListProfilesByStatusUseCase for StubListProfilesUseCase {
    async fn execute(
        &self,
        _status: ProfileStatus,
    ) -> Result<Vec<ProfileSummary>, ListProfilesError> {
        Ok(vec![])
    }
}

pub struct StubSearchEmployeesUseCase;

#[async_trait]
impl ISearchEmployeesUseCase for StubSearchEmployeesUseCase {
    async fn execute(&self, _query: &str) -> Result<Vec<ProfileSummary>, SearchEmployeesError> {
        Ok(vec![])
    }
}

pub struct StubUploadDocumentUseCase;

#[async_trait]
impl IUploadDocumentUseCase for StubUploadDocumentUseCase {
    async fn execute(&self, _input: UploadInput) -> Result<Document, UploadDocumentError> {
        Err(UploadDocumentError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubReviewDocumentUseCase;

#[async_trait]
impl IReviewDocumentUseCase for StubReviewDocumentUseCase {
    async fn execute(
        &self,
        _document_id: Uuid,
        _decision: DocumentDecision,
        _feedback: Option<String>,
    ) -> Result<(), ReviewDocumentError> {
        Err(ReviewDocumentError::RepositoryError(NOT_WIRED.to_string()))
    }
}

pub struct StubVisaStatusUseCase;

#[async_trait]
impl IVisaStatusUseCase for StubVisaStatusUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<VisaStatus, VisaStatusError> {
        Err(VisaStatusError::NotApplicable)
    }
}

pub struct StubDownloadDocumentUseCase;

#[async_trait]
impl IDownloadDocumentUseCase for StubDownloadDocumentUseCase {
    async fn execute(
        &self,
        _document_id: Uuid,
        _requester_id: Uuid,
        _requester_role: Role,
    ) -> Result<DownloadedFile, DownloadDocumentError> {
        Err(DownloadDocumentError::DocumentNotFound)
    }
}

pub struct StubDashboardStatsUseCase;

#[async_trait]
impl IDashboardStatsUseCase for StubDashboardStatsUseCase {
    async fn execute(&self) -> Result<DashboardCounts, DashboardStatsError> {
        Ok(DashboardCounts {
            total_employees: 0,
            pending_applications: 0,
            visa_employees: 0,
            active_tokens: 0,
        })
    }
}

pub struct StubVisaInProgressUseCase;

#[async_trait]
impl IVisaInProgressUseCase for StubVisaInProgressUseCase {
    async fn execute(&self) -> Result<Vec<VisaProgressRow>, VisaInProgressError> {
        Ok(vec![])
    }
}

pub struct StubVisaAllUseCase;

#[async_trait]
impl IVisaAllUseCase for StubVisaAllUseCase {
    async fn execute(&self) -> Result<Vec<VisaEmployeeSummary>, VisaAllError> {
        Ok(vec![])
    }
}
