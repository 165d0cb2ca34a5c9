mod list_profiles;
mod my_profile;
mod review_onboarding;
mod search_employees;
mod submit_onboarding;

pub use list_profiles::*;
pub use my_profile::*;
pub use review_onboarding::*;
pub use search_employees::*;
pub use submit_onboarding::*;
