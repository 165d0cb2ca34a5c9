use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, User};
use crate::modules::auth::application::ports::outgoing::{
    password_hasher::PasswordHasher, registration_token_repository::RegistrationTokenRepository,
    token_provider::TokenProvider, user_query::UserQuery, user_repository::UserRepository,
};
use crate::modules::auth::application::services::token_secret;
use crate::modules::onboarding::application::ports::outgoing::ProfileRepository;

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Invalid or expired registration token")]
    InvalidToken,

    #[error("Email does not match the invitation")]
    EmailMismatch,

    #[error("Username must be between 3 and 30 characters")]
    InvalidUsernameLength,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Email is already registered")]
    EmailTaken,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, serde::Deserialize, utoipa::ToSchema)]
pub struct RegisterUserInput {
    pub token: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug)]
pub struct RegisterUserOutput {
    pub user: User,
    pub session_token: String,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, input: RegisterUserInput) -> Result<RegisterUserOutput, RegisterUserError>;
}

pub struct RegisterUserUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: RegistrationTokenRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
    token_repository: T,
    profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R, T> RegisterUserUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: RegistrationTokenRepository + Send + Sync,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        token_repository: T,
        profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            token_repository,
            profile_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R, T> IRegisterUserUseCase for RegisterUserUseCase<Q, R, T>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    T: RegistrationTokenRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegisterUserInput,
    ) -> Result<RegisterUserOutput, RegisterUserError> {
        // Cheap field checks before touching the store.
        if input.username.len() < 3 || input.username.len() > 30 {
            return Err(RegisterUserError::InvalidUsernameLength);
        }
        if input.password.len() < 6 {
            return Err(RegisterUserError::WeakPassword);
        }
        if !email_address::EmailAddress::is_valid(&input.email) {
            return Err(RegisterUserError::InvalidEmail);
        }

        let token = self
            .token_repository
            .find_by_hash(&token_secret::hash_secret(&input.token))
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?
            .ok_or(RegisterUserError::InvalidToken)?;

        if token.email != input.email {
            return Err(RegisterUserError::EmailMismatch);
        }
        if token.expires_at <= Utc::now() {
            return Err(RegisterUserError::InvalidToken);
        }
        if token.used {
            // Recovery path: a crash after mark_used but before user creation
            // leaves a consumed token with no account behind it. Treat that
            // as resumable rather than a dead end.
            match self.user_query.find_by_email(&token.email).await {
                Ok(None) => {}
                _ => return Err(RegisterUserError::InvalidToken),
            }
        }

        if let Ok(Some(_)) = self.user_query.find_by_username(&input.username).await {
            return Err(RegisterUserError::UsernameTaken);
        }
        if let Ok(Some(_)) = self.user_query.find_by_email(&input.email).await {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .map_err(RegisterUserError::HashingFailed)?;

        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            password_hash,
            role: Role::Employee,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let user = self
            .user_repository
            .create_user(user)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        self.profile_repository
            .create_initial(
                user.id,
                user.email.clone(),
                input.first_name,
                input.last_name,
            )
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        // Consume last. A crash before this point leaves the token unused,
        // which the duplicate checks above make harmless; failing here only
        // re-opens the recovery path on the next attempt.
        if let Err(e) = self.token_repository.mark_used(token.id).await {
            tracing::warn!(token_id = %token.id, error = %e, "Failed to mark registration token used");
        }

        let session_token = self
            .token_provider
            .generate_session_token(user.id, user.role)
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        Ok(RegisterUserOutput {
            user,
            session_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::RegistrationToken;
    use crate::modules::auth::application::ports::outgoing::token_provider::{
        SessionClaims, TokenError,
    };
    use crate::modules::auth::application::ports::outgoing::{
        TokenRepositoryError, UserRepositoryError,
    };
    use crate::modules::onboarding::application::domain::draft::ProfileDraft;
    use crate::modules::onboarding::application::domain::entities::{ProfileStatus, UserProfile};
    use crate::modules::onboarding::application::ports::outgoing::ProfileRepositoryError;
    use chrono::Duration;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockUserQuery {
        taken_username: Option<String>,
        taken_email: Option<String>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn find_by_username(&self, username: &str) -> Result<Option<User>, String> {
            Ok(self
                .taken_username
                .as_deref()
                .filter(|u| *u == username)
                .map(|_| dummy_user(username, "other@x.com")))
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
            Ok(self
                .taken_email
                .as_deref()
                .filter(|e| *e == email)
                .map(|_| dummy_user("other", email)))
        }
    }

    #[derive(Default)]
    struct MockUserRepository;

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn create_user(&self, user: User) -> Result<User, UserRepositoryError> {
            Ok(user)
        }

        async fn update_role(&self, _user_id: Uuid, _role: Role) -> Result<(), UserRepositoryError> {
            unimplemented!()
        }
    }

    struct MockTokenRepository {
        token: Option<RegistrationToken>,
        marked_used: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl RegistrationTokenRepository for MockTokenRepository {
        async fn insert(&self, _token: RegistrationToken) -> Result<(), TokenRepositoryError> {
            unimplemented!()
        }

        async fn find_by_hash(
            &self,
            token_hash: &str,
        ) -> Result<Option<RegistrationToken>, TokenRepositoryError> {
            Ok(self.token.clone().filter(|t| t.token_hash == token_hash))
        }

        async fn find_open_by_email(
            &self,
            _email: &str,
        ) -> Result<Option<RegistrationToken>, TokenRepositoryError> {
            Ok(None)
        }

        async fn mark_used(&self, token_id: Uuid) -> Result<(), TokenRepositoryError> {
            self.marked_used.lock().unwrap().push(token_id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockProfileRepository {
        created_for: Mutex<Vec<Uuid>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn create_initial(
            &self,
            user_id: Uuid,
            email: String,
            first_name: Option<String>,
            last_name: Option<String>,
        ) -> Result<UserProfile, ProfileRepositoryError> {
            self.created_for.lock().unwrap().push(user_id);
            Ok(UserProfile {
                id: Uuid::new_v4(),
                user_id,
                status: ProfileStatus::NeverSubmitted,
                feedback: String::new(),
                first_name,
                last_name,
                middle_name: None,
                preferred_name: None,
                email,
                cell_phone: None,
                work_phone: None,
                ssn: None,
                date_of_birth: None,
                gender: None,
                address: None,
                work_authorization: None,
                reference: None,
                emergency_contacts: vec![],
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }

        async fn apply_submission(
            &self,
            _user_id: Uuid,
            _draft: ProfileDraft,
        ) -> Result<UserProfile, ProfileRepositoryError> {
            unimplemented!()
        }

        async fn set_review(
            &self,
            _profile_id: Uuid,
            _status: ProfileStatus,
            _feedback: String,
        ) -> Result<(), ProfileRepositoryError> {
            unimplemented!()
        }
    }

    struct StubHasher;

    impl PasswordHasher for StubHasher {
        fn hash_password(&self, _password: &str) -> Result<String, String> {
            Ok("hashed".to_string())
        }

        fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, String> {
            Ok(true)
        }
    }

    struct StubTokenProvider;

    impl TokenProvider for StubTokenProvider {
        fn generate_session_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
            Ok("jwt".to_string())
        }

        fn verify_session_token(&self, _token: &str) -> Result<SessionClaims, TokenError> {
            unimplemented!()
        }
    }

    fn dummy_user(username: &str, email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
            role: Role::Employee,
            first_name: None,
            last_name: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn stored_token(secret: &str, email: &str, used: bool) -> RegistrationToken {
        RegistrationToken {
            id: Uuid::new_v4(),
            email: email.to_string(),
            token_hash: token_secret::hash_secret(secret),
            expires_at: Utc::now() + Duration::hours(1),
            used,
            created_at: Utc::now(),
        }
    }

    fn input(secret: &str, email: &str) -> RegisterUserInput {
        RegisterUserInput {
            token: secret.to_string(),
            email: email.to_string(),
            username: "newhire".to_string(),
            password: "password1".to_string(),
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
        }
    }

    fn use_case(
        query: MockUserQuery,
        token_repo: MockTokenRepository,
    ) -> RegisterUserUseCase<MockUserQuery, MockUserRepository, MockTokenRepository> {
        RegisterUserUseCase::new(
            query,
            MockUserRepository,
            token_repo,
            Arc::new(MockProfileRepository::default()),
            Arc::new(StubHasher),
            Arc::new(StubTokenProvider),
        )
    }

    #[tokio::test]
    async fn test_register_success() {
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", false)),
            marked_used: Mutex::new(vec![]),
        };
        let use_case = use_case(MockUserQuery::default(), token_repo);

        let out = use_case.execute(input("s3cr3t", "a@x.com")).await.unwrap();

        assert_eq!(out.user.role, Role::Employee);
        assert_eq!(out.user.email, "a@x.com");
        assert_eq!(out.session_token, "jwt");
    }

    #[tokio::test]
    async fn test_register_wrong_email_is_mismatch() {
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", false)),
            marked_used: Mutex::new(vec![]),
        };
        let use_case = use_case(MockUserQuery::default(), token_repo);

        let result = use_case.execute(input("s3cr3t", "b@x.com")).await;
        assert!(matches!(result, Err(RegisterUserError::EmailMismatch)));
    }

    #[tokio::test]
    async fn test_register_unknown_token_fails() {
        let token_repo = MockTokenRepository {
            token: None,
            marked_used: Mutex::new(vec![]),
        };
        let use_case = use_case(MockUserQuery::default(), token_repo);

        let result = use_case.execute(input("nope", "a@x.com")).await;
        assert!(matches!(result, Err(RegisterUserError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_register_used_token_with_existing_account_fails() {
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", true)),
            marked_used: Mutex::new(vec![]),
        };
        let query = MockUserQuery {
            taken_email: Some("a@x.com".to_string()),
            ..Default::default()
        };
        let use_case = use_case(query, token_repo);

        let result = use_case.execute(input("s3cr3t", "a@x.com")).await;
        assert!(matches!(result, Err(RegisterUserError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_register_used_token_without_account_is_resumable() {
        // Consumed token, no account: the earlier run died between
        // mark_used and create_user. Registration must still go through.
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", true)),
            marked_used: Mutex::new(vec![]),
        };
        let use_case = use_case(MockUserQuery::default(), token_repo);

        assert!(use_case.execute(input("s3cr3t", "a@x.com")).await.is_ok());
    }

    #[tokio::test]
    async fn test_register_short_username_rejected() {
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", false)),
            marked_used: Mutex::new(vec![]),
        };
        let use_case = use_case(MockUserQuery::default(), token_repo);

        let mut bad = input("s3cr3t", "a@x.com");
        bad.username = "ab".to_string();

        assert!(matches!(
            use_case.execute(bad).await,
            Err(RegisterUserError::InvalidUsernameLength)
        ));
    }

    #[tokio::test]
    async fn test_register_short_password_rejected() {
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", false)),
            marked_used: Mutex::new(vec![]),
        };
        let use_case = use_case(MockUserQuery::default(), token_repo);

        let mut bad = input("s3cr3t", "a@x.com");
        bad.password = "12345".to_string();

        assert!(matches!(
            use_case.execute(bad).await,
            Err(RegisterUserError::WeakPassword)
        ));
    }

    #[tokio::test]
    async fn test_register_taken_username_rejected() {
        let token_repo = MockTokenRepository {
            token: Some(stored_token("s3cr3t", "a@x.com", false)),
            marked_used: Mutex::new(vec![]),
        };
        let query = MockUserQuery {
            taken_username: Some("newhire".to_string()),
            ..Default::default()
        };
        let use_case = use_case(query, token_repo);

        assert!(matches!(
            use_case.execute(input("s3cr3t", "a@x.com")).await,
            Err(RegisterUserError::UsernameTaken)
        ));
    }
}
