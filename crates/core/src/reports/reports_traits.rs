use crate::errors::Result;
use crate::reports::reports_model::{DashboardSummary, MonthlyReport, ReportPeriod};
use async_trait::async_trait;

/// Trait for the backend's report endpoints
#[async_trait]
pub trait ReportApiTrait: Send + Sync {
    async fn get_monthly_report(&self, period: ReportPeriod) -> Result<MonthlyReport>;
    async fn get_dashboard_summary(&self) -> Result<DashboardSummary>;
}

/// Trait for report service operations
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    async fn get_monthly_report(&self, period: ReportPeriod) -> Result<MonthlyReport>;

    /// Report for `period` alongside the month before it.
    async fn compare_with_previous(
        &self,
        period: ReportPeriod,
    ) -> Result<(MonthlyReport, MonthlyReport)>;

    async fn get_dashboard_summary(&self) -> Result<DashboardSummary>;
}
