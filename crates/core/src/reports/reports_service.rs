use crate::errors::{ApiError, Result};
use crate::reports::reports_model::{DashboardSummary, MonthlyReport, ReportPeriod};
use crate::reports::reports_traits::{ReportApiTrait, ReportServiceTrait};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

pub struct ReportService {
    report_api: Arc<dyn ReportApiTrait>,
}

impl ReportService {
    pub fn new(report_api: Arc<dyn ReportApiTrait>) -> Self {
        ReportService { report_api }
    }

    fn check_period(period: ReportPeriod, report: &MonthlyReport) -> Result<()> {
        if report.year != period.year() || report.month != period.month() {
            return Err(ApiError::Decode(format!(
                "requested report for {} but received {:04}-{:02}",
                period, report.year, report.month
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn get_monthly_report(&self, period: ReportPeriod) -> Result<MonthlyReport> {
        debug!("Fetching monthly report for {}", period);
        let report = self.report_api.get_monthly_report(period).await?;
        Self::check_period(period, &report)?;
        Ok(report)
    }

    async fn compare_with_previous(
        &self,
        period: ReportPeriod,
    ) -> Result<(MonthlyReport, MonthlyReport)> {
        let previous = period.previous()?;
        futures::try_join!(
            self.get_monthly_report(period),
            self.get_monthly_report(previous)
        )
    }

    async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
        self.report_api.get_dashboard_summary().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{Error, ValidationError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockReportApi {
        /// Echo the requested period back unless set.
        fixed_month: Option<u32>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ReportApiTrait for MockReportApi {
        async fn get_monthly_report(&self, period: ReportPeriod) -> Result<MonthlyReport> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(MonthlyReport {
                year: period.year(),
                month: self.fixed_month.unwrap_or(period.month()),
                total_income: 1000.0 * period.month() as f64,
                total_expense: 500.0,
                net_savings: 1000.0 * period.month() as f64 - 500.0,
                category_breakdown: vec![],
            })
        }

        async fn get_dashboard_summary(&self) -> Result<DashboardSummary> {
            Ok(DashboardSummary {
                total_income: 1.0,
                total_expense: 2.0,
                balance: -1.0,
                active_goals: 3,
                completed_goals: 1,
            })
        }
    }

    #[tokio::test]
    async fn test_compare_with_previous() {
        let service = ReportService::new(Arc::new(MockReportApi::default()));
        let (current, previous) = service
            .compare_with_previous(ReportPeriod::new(2024, 3).unwrap())
            .await
            .unwrap();
        assert_eq!(current.month, 3);
        assert_eq!(previous.month, 2);
        assert_eq!(current.total_income, 3000.0);
    }

    #[tokio::test]
    async fn test_mismatched_period_is_rejected() {
        let service = ReportService::new(Arc::new(MockReportApi {
            fixed_month: Some(7),
            ..Default::default()
        }));
        let err = service
            .get_monthly_report(ReportPeriod::new(2024, 3).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_compare_at_first_supported_month() {
        let api = Arc::new(MockReportApi::default());
        let service = ReportService::new(api.clone());
        let err = service
            .compare_with_previous(ReportPeriod::new(2000, 1).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidPeriod(_))
        ));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_dashboard_passthrough() {
        let service = ReportService::new(Arc::new(MockReportApi::default()));
        let summary = service.get_dashboard_summary().await.unwrap();
        assert_eq!(summary.active_goals, 3);
    }
}
