pub mod registration_tokens;
pub mod users;
