//! Recurring transaction models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recurring_schedule::{Frequency, RecurringSchedule};
use super::transactions_model::TransactionType;

/// A transaction template that repeats on a schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringTransaction {
    pub id: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category_id: String,
    pub description: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl RecurringTransaction {
    pub fn schedule(&self) -> RecurringSchedule {
        RecurringSchedule {
            start_date: self.start_date,
            end_date: self.end_date,
            frequency: self.frequency,
        }
    }

    /// Next due date on or after `today`.
    ///
    /// The backend's `nextDueDate` is used when it is not stale; otherwise the
    /// schedule is walked locally. `None` for paused or finished schedules.
    pub fn next_due(&self, today: NaiveDate) -> Option<NaiveDate> {
        if !self.is_active {
            return None;
        }
        match self.next_due_date {
            Some(due) if due >= today => Some(due),
            _ => self.schedule().next_occurrence(today),
        }
    }

    /// Converts back into the create/update payload.
    pub fn to_update(&self) -> NewRecurringTransaction {
        NewRecurringTransaction {
            amount: self.amount,
            transaction_type: self.transaction_type,
            category_id: self.category_id.clone(),
            description: self.description.clone(),
            frequency: self.frequency,
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
        }
    }
}

/// Input model for creating or updating a recurring transaction
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringTransaction {
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category_id: String,
    pub description: String,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl NewRecurringTransaction {
    pub fn schedule(&self) -> RecurringSchedule {
        RecurringSchedule {
            start_date: self.start_date,
            end_date: self.end_date,
            frequency: self.frequency,
        }
    }
}

/// A recurring transaction paired with its next due date.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingTransaction {
    pub recurring: RecurringTransaction,
    pub due_date: NaiveDate,
}
