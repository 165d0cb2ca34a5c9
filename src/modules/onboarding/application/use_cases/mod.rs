pub mod fetch_my_profile;
pub mod list_profiles_by_status;
pub mod review_onboarding;
pub mod search_employees;
pub mod submit_onboarding;
