//! Report domain models.
//!
//! Reports and the dashboard summary are aggregated by the backend. The
//! client only addresses them by period and renders what comes back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, Result, ValidationError};
use crate::transactions::TransactionType;

const MIN_REPORT_YEAR: i32 = 2000;
const MAX_REPORT_YEAR: i32 = 9999;

/// A calendar month, formatted as `YYYY-MM`.
///
/// Every value is within `2000-01..=9999-12`; all constructors go through
/// [`ReportPeriod::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReportPeriod {
    year: i32,
    month: u32,
}

impl ReportPeriod {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(MIN_REPORT_YEAR..=MAX_REPORT_YEAR).contains(&year) {
            return Err(ValidationError::InvalidPeriod(format!(
                "year {} is outside {}..={}",
                year, MIN_REPORT_YEAR, MAX_REPORT_YEAR
            ))
            .into());
        }
        if !(1..=12).contains(&month) {
            return Err(
                ValidationError::InvalidPeriod(format!("month {} is outside 1..=12", month))
                    .into(),
            );
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Result<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before this one. Fails for the first supported month.
    pub fn previous(&self) -> Result<Self> {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for ReportPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ValidationError::InvalidPeriod(format!("'{}' is not YYYY-MM", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid().into());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// Total for one category within a report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category_name: String,
    pub transaction_type: TransactionType,
    pub total: f64,
}

/// Monthly income/expense report as aggregated by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_savings: f64,
    #[serde(default)]
    pub category_breakdown: Vec<CategoryTotal>,
}

impl MonthlyReport {
    /// Share of income kept, in percent. `None` without income.
    pub fn savings_rate(&self) -> Option<f64> {
        (self.total_income > 0.0).then(|| self.net_savings / self.total_income * 100.0)
    }

    /// Category totals of one type, largest first.
    pub fn top_categories(&self, transaction_type: TransactionType) -> Vec<&CategoryTotal> {
        let mut totals: Vec<&CategoryTotal> = self
            .category_breakdown
            .iter()
            .filter(|c| c.transaction_type == transaction_type)
            .collect();
        totals.sort_by(|a, b| b.total.total_cmp(&a.total));
        totals
    }
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    #[serde(default)]
    pub active_goals: u32,
    #[serde(default)]
    pub completed_goals: u32,
}
