pub mod auth;
pub mod documents;
pub mod email;
pub mod hr;
pub mod onboarding;
