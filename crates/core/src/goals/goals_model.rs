//! Goals domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::goals_progress::{GoalProgressInput, GoalStatusResult};

/// Domain model representing a savings goal as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    /// Days left until the deadline as computed by the backend.
    /// Zero or negative means the deadline has been reached.
    #[serde(default)]
    pub remaining_days: Option<i64>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Days left until the deadline.
    ///
    /// The backend's `remainingDays` wins; otherwise it is derived from the
    /// deadline. Goals with neither have no timeline.
    pub fn remaining_days(&self, today: NaiveDate) -> Option<i64> {
        self.remaining_days
            .or_else(|| self.deadline.map(|deadline| (deadline - today).num_days()))
    }

    /// Length of the goal's window in days, when both ends are known.
    pub fn total_days(&self) -> Option<i64> {
        let start = self
            .start_date
            .or_else(|| self.created_at.map(|ts| ts.date_naive()))?;
        let deadline = self.deadline?;
        let total = (deadline - start).num_days();
        (total > 0).then_some(total)
    }

    /// Builds the evaluator input for this goal, or `None` if it has no timeline.
    pub fn progress_input(&self, today: NaiveDate) -> Option<GoalProgressInput> {
        let remaining_days = self.remaining_days(today)?;
        let input = GoalProgressInput::new(self.current_amount, self.target_amount, remaining_days);
        Some(match self.total_days() {
            Some(total) => input.with_total_days(total),
            None => input,
        })
    }

    /// Amount still missing to reach the target, never negative.
    pub fn remaining_amount(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

/// Input model for creating or updating a goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub description: Option<String>,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

/// A single contribution toward a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingRecord {
    pub id: String,
    pub goal_id: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: Option<String>,
}

/// Input model for recording a contribution
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingRecord {
    pub amount: f64,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// A goal together with its derived status.
///
/// `progress` is `None` for goals without a deadline; `amount_progress` is
/// always filled.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithProgress {
    pub goal: Goal,
    pub amount_progress: f64,
    pub progress: Option<GoalStatusResult>,
    pub required_daily_saving: Option<f64>,
}

/// Everything the goal detail view shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetail {
    pub goal: GoalWithProgress,
    /// Saving history, newest first.
    pub records: Vec<SavingRecord>,
    /// Sum of the listed records. Display only: `currentAmount` already
    /// includes them.
    pub total_recorded: f64,
}
