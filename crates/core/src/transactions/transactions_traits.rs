use crate::errors::Result;
use crate::transactions::recurring_model::{
    NewRecurringTransaction, RecurringTransaction, UpcomingTransaction,
};
use crate::transactions::transactions_model::{
    Category, NewTransaction, Transaction, TransactionFilter,
};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for the backend's transaction, category and recurring endpoints
#[async_trait]
pub trait TransactionApiTrait: Send + Sync {
    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, new_transaction: &NewTransaction) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn list_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>>;
    async fn create_recurring_transaction(
        &self,
        new_recurring: &NewRecurringTransaction,
    ) -> Result<RecurringTransaction>;
    async fn update_recurring_transaction(
        &self,
        recurring_id: &str,
        update: &NewRecurringTransaction,
    ) -> Result<RecurringTransaction>;
    async fn delete_recurring_transaction(&self, recurring_id: &str) -> Result<()>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn get_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
    async fn get_categories(&self) -> Result<Vec<Category>>;
    async fn get_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>>;

    /// Validates the window against `today` before creating.
    async fn create_recurring_transaction(
        &self,
        new_recurring: NewRecurringTransaction,
        today: NaiveDate,
    ) -> Result<RecurringTransaction>;

    async fn update_recurring_transaction(
        &self,
        recurring_id: &str,
        update: NewRecurringTransaction,
    ) -> Result<RecurringTransaction>;

    async fn delete_recurring_transaction(&self, recurring_id: &str) -> Result<()>;

    /// Pauses or resumes a recurring transaction.
    async fn set_recurring_active(
        &self,
        recurring_id: &str,
        is_active: bool,
    ) -> Result<RecurringTransaction>;

    /// Active recurring transactions due within `horizon_days` of `today`,
    /// soonest first.
    async fn get_upcoming(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Result<Vec<UpcomingTransaction>>;
}
