//! Report and dashboard endpoints.

use async_trait::async_trait;

use spendsmart_core::errors::Result;
use spendsmart_core::reports::{DashboardSummary, MonthlyReport, ReportApiTrait, ReportPeriod};

use crate::client::SpendSmartApiClient;

#[async_trait]
impl ReportApiTrait for SpendSmartApiClient {
    async fn get_monthly_report(&self, period: ReportPeriod) -> Result<MonthlyReport> {
        self.get(
            "/api/reports/monthly",
            &[
                ("year", period.year().to_string()),
                ("month", period.month().to_string()),
            ],
        )
        .await
    }

    async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        self.get("/api/dashboard/summary", &[]).await
    }
}
