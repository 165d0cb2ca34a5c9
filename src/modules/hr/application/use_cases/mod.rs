pub mod dashboard_stats;
pub mod visa_all;
pub mod visa_in_progress;
