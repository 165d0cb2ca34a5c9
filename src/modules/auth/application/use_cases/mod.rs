pub mod change_user_role;
pub mod issue_registration_token;
pub mod login_user;
pub mod register_user;
pub mod validate_registration_token;
