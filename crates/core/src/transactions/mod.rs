//! Transactions module - transactions, categories and recurring schedules.

mod recurring_model;
pub mod recurring_schedule;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use recurring_model::{NewRecurringTransaction, RecurringTransaction, UpcomingTransaction};
pub use recurring_schedule::{validate_recurring_window, Frequency, RecurringSchedule};
pub use transactions_model::{
    Category, NewTransaction, Transaction, TransactionFilter, TransactionType,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionApiTrait, TransactionServiceTrait};
