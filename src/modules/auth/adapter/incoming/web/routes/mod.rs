mod change_role;
mod generate_token;
mod login_user;
mod register_user;
mod validate_token;

pub use change_role::*;
pub use generate_token::*;
pub use login_user::*;
pub use register_user::*;
pub use validate_token::*;
