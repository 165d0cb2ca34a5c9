mod dashboard_stats;
mod visa_all;
mod visa_in_progress;

pub use dashboard_stats::*;
pub use visa_all::*;
pub use visa_in_progress::*;
