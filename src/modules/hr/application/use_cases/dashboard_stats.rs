use async_trait::async_trait;
use chrono::Utc;

use crate::modules::hr::application::ports::outgoing::{DashboardCounts, HrQuery};

#[derive(Debug, thiserror::Error)]
pub enum DashboardStatsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDashboardStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardCounts, DashboardStatsError>;
}

pub struct DashboardStatsUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    hr_query: Q,
}

impl<Q> DashboardStatsUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    pub fn new(hr_query: Q) -> Self {
        Self { hr_query }
    }
}

#[async_trait]
impl<Q> IDashboardStatsUseCase for DashboardStatsUseCase<Q>
where
    Q: HrQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardCounts, DashboardStatsError> {
        self.hr_query
            .dashboard_counts(Utc::now())
            .await
            .map_err(DashboardStatsError::RepositoryError)
    }
}
