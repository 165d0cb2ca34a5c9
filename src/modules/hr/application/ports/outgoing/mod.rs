pub mod hr_query;

pub use hr_query::{DashboardCounts, HrQuery, OpenTokenRow, VisaEmployeeRow};
