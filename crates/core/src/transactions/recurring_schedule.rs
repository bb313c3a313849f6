//! Recurring schedule arithmetic and date-window validation.
//!
//! Occurrence `n` is always computed from the start date, never from the
//! previous occurrence, so a schedule starting on the 31st returns to the 31st
//! after passing through shorter months.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// How often a recurring transaction repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// The `n`-th occurrence counted from `start` (occurrence 0 is `start`).
    ///
    /// Month arithmetic clamps to the last day of shorter months.
    pub fn nth_from(&self, start: NaiveDate, n: u32) -> Option<NaiveDate> {
        match self {
            Frequency::Daily => start.checked_add_days(Days::new(u64::from(n))),
            Frequency::Weekly => start.checked_add_days(Days::new(7 * u64::from(n))),
            Frequency::Monthly => start.checked_add_months(Months::new(n)),
            Frequency::Yearly => start.checked_add_months(Months::new(n.checked_mul(12)?)),
        }
    }

    /// One step after `date`.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.nth_from(date, 1)
    }

    /// Lower bound on the occurrence index whose date could be `target`.
    fn index_hint(&self, start: NaiveDate, target: NaiveDate) -> u32 {
        let days = (target - start).num_days().max(0);
        let approx = match self {
            Frequency::Daily => days,
            Frequency::Weekly => days / 7,
            // Months are at most 31 days, years at most 366.
            Frequency::Monthly => days / 31,
            Frequency::Yearly => days / 366,
        };
        u32::try_from(approx).unwrap_or(u32::MAX)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" | "annually" => Ok(Frequency::Yearly),
            other => Err(format!("unknown frequency '{}'", other)),
        }
    }
}

/// The date window and cadence of a recurring transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringSchedule {
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub frequency: Frequency,
}

impl RecurringSchedule {
    /// Checks the window of an existing schedule.
    ///
    /// The end date, when set, must be after the start date and leave room for
    /// at least a second occurrence.
    pub fn validate_window(&self) -> Result<()> {
        let Some(end) = self.end_date else {
            return Ok(());
        };
        if end <= self.start_date {
            return Err(ValidationError::date_window(format!(
                "end date {} must be after start date {}",
                end, self.start_date
            ))
            .into());
        }
        match self.frequency.advance(self.start_date) {
            Some(second) if second <= end => Ok(()),
            _ => Err(ValidationError::date_window(format!(
                "a {} schedule from {} to {} never repeats; record it as a single transaction",
                self.frequency, self.start_date, end
            ))
            .into()),
        }
    }

    /// Checks a schedule that is about to be created: it must not start
    /// before `today`, and its window must be valid.
    pub fn validate_new(&self, today: NaiveDate) -> Result<()> {
        if self.start_date < today {
            return Err(ValidationError::date_window(format!(
                "start date {} is in the past",
                self.start_date
            ))
            .into());
        }
        self.validate_window()
    }

    fn within_end(&self, date: NaiveDate) -> bool {
        self.end_date.map_or(true, |end| date <= end)
    }

    /// First occurrence on or after `date`, if the schedule has one.
    pub fn next_occurrence(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut n = self.frequency.index_hint(self.start_date, date);
        loop {
            let occurrence = self.frequency.nth_from(self.start_date, n)?;
            if !self.within_end(occurrence) {
                return None;
            }
            if occurrence >= date {
                return Some(occurrence);
            }
            n = n.checked_add(1)?;
        }
    }

    /// All occurrences in `[from, to]`, in ascending order.
    pub fn occurrences_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        if to < from {
            return dates;
        }
        let mut n = self.frequency.index_hint(self.start_date, from);
        while let Some(occurrence) = self.frequency.nth_from(self.start_date, n) {
            if occurrence > to || !self.within_end(occurrence) {
                break;
            }
            if occurrence >= from {
                dates.push(occurrence);
            }
            n = match n.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        dates
    }
}

/// Validates the date window of a new recurring transaction.
pub fn validate_recurring_window(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    frequency: Frequency,
    today: NaiveDate,
) -> Result<()> {
    RecurringSchedule {
        start_date,
        end_date,
        frequency,
    }
    .validate_new(today)
}
