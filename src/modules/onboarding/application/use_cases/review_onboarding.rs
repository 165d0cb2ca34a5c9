use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::modules::documents::application::domain::entities::{DocumentStatus, DocumentType};
use crate::modules::documents::application::ports::outgoing::DocumentRepository;
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;
use crate::modules::onboarding::application::domain::entities::{ProfileStatus, ReviewAction};
use crate::modules::onboarding::application::ports::outgoing::{
    ProfileQuery, ProfileRepository, ProfileRepositoryError,
};

#[derive(Debug, thiserror::Error)]
pub enum ReviewOnboardingError {
    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Only pending applications can be reviewed")]
    NotPending,

    #[error("Feedback is required when rejecting")]
    FeedbackRequired,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReviewOnboardingUseCase: Send + Sync {
    async fn execute(
        &self,
        profile_id: Uuid,
        action: ReviewAction,
        feedback: Option<String>,
    ) -> Result<(), ReviewOnboardingError>;
}

pub struct ReviewOnboardingUseCase<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    profile_query: Q,
    profile_repository: R,
    document_repository: Arc<dyn DocumentRepository + Send + Sync>,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R> ReviewOnboardingUseCase<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    pub fn new(
        profile_query: Q,
        profile_repository: R,
        document_repository: Arc<dyn DocumentRepository + Send + Sync>,
        notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            profile_query,
            profile_repository,
            document_repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> IReviewOnboardingUseCase for ReviewOnboardingUseCase<Q, R>
where
    Q: ProfileQuery + Send + Sync,
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        profile_id: Uuid,
        action: ReviewAction,
        feedback: Option<String>,
    ) -> Result<(), ReviewOnboardingError> {
        let profile = self
            .profile_query
            .find_by_id(profile_id)
            .await
            .map_err(ReviewOnboardingError::RepositoryError)?
            .ok_or(ReviewOnboardingError::ProfileNotFound)?;

        if !profile.status.can_review() {
            return Err(ReviewOnboardingError::NotPending);
        }

        let feedback = feedback.unwrap_or_default();
        let status = match action {
            ReviewAction::Approve => ProfileStatus::Approved,
            ReviewAction::Reject => {
                if feedback.trim().is_empty() {
                    return Err(ReviewOnboardingError::FeedbackRequired);
                }
                ProfileStatus::Rejected
            }
        };

        self.profile_repository
            .set_review(profile_id, status, feedback.clone())
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::ProfileNotFound => ReviewOnboardingError::ProfileNotFound,
                other => ReviewOnboardingError::RepositoryError(other.to_string()),
            })?;

        // The OPT receipt was part of the application for F1 holders;
        // approving the application approves that slot with it.
        if status == ProfileStatus::Approved && profile.is_visa_tracked() {
            match self
                .document_repository
                .find_by_user_and_type(profile.user_id, DocumentType::OptReceipt)
                .await
            {
                Ok(Some(doc)) if doc.status == DocumentStatus::Pending => {
                    if let Err(e) = self
                        .document_repository
                        .set_review(doc.id, DocumentStatus::Approved, String::new())
                        .await
                    {
                        warn!(user_id = %profile.user_id, error = %e, "OPT receipt auto-approval failed");
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(user_id = %profile.user_id, error = %e, "OPT receipt lookup failed");
                }
            }
        }

        // Decision delivery is best-effort; the review itself already stuck.
        if let Err(e) = self
            .notifier
            .send_onboarding_decision(
                &profile.email,
                status == ProfileStatus::Approved,
                &feedback,
            )
            .await
        {
            warn!(email = %profile.email, error = %e, "Failed to send onboarding decision email");
        }

        Ok(())
    }
}
