//! Reports module - monthly reports and the dashboard summary.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::{CategoryTotal, DashboardSummary, MonthlyReport, ReportPeriod};
pub use reports_service::ReportService;
pub use reports_traits::{ReportApiTrait, ReportServiceTrait};
