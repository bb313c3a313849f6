use crate::errors::{ensure_not_blank, ensure_positive_amount, ApiError, Result};
use crate::transactions::recurring_model::{
    NewRecurringTransaction, RecurringTransaction, UpcomingTransaction,
};
use crate::transactions::transactions_model::{
    Category, NewTransaction, Transaction, TransactionFilter,
};
use crate::transactions::transactions_traits::{TransactionApiTrait, TransactionServiceTrait};
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};
use std::sync::Arc;

pub struct TransactionService {
    transaction_api: Arc<dyn TransactionApiTrait>,
}

impl TransactionService {
    pub fn new(transaction_api: Arc<dyn TransactionApiTrait>) -> Self {
        TransactionService { transaction_api }
    }

    fn validate_transaction(tx: &NewTransaction) -> Result<()> {
        ensure_positive_amount("amount", tx.amount)?;
        ensure_not_blank("description", &tx.description)?;
        ensure_not_blank("categoryId", &tx.category_id)?;
        Ok(())
    }

    fn validate_recurring_fields(rec: &NewRecurringTransaction) -> Result<()> {
        ensure_positive_amount("amount", rec.amount)?;
        ensure_not_blank("description", &rec.description)?;
        ensure_not_blank("categoryId", &rec.category_id)?;
        Ok(())
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn get_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
        let mut transactions = self.transaction_api.list_transactions(&filter).await?;
        // Newest first, matching the transaction list view.
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        debug!("Loaded {} transactions", transactions.len());
        Ok(transactions)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        Self::validate_transaction(&new_transaction)?;
        self.transaction_api
            .create_transaction(&new_transaction)
            .await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.transaction_api.delete_transaction(transaction_id).await
    }

    async fn get_categories(&self) -> Result<Vec<Category>> {
        self.transaction_api.list_categories().await
    }

    async fn get_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>> {
        self.transaction_api.list_recurring_transactions().await
    }

    async fn create_recurring_transaction(
        &self,
        new_recurring: NewRecurringTransaction,
        today: NaiveDate,
    ) -> Result<RecurringTransaction> {
        Self::validate_recurring_fields(&new_recurring)?;
        if let Err(e) = new_recurring.schedule().validate_new(today) {
            warn!(
                "Rejected recurring transaction '{}': {}",
                new_recurring.description, e
            );
            return Err(e);
        }
        self.transaction_api
            .create_recurring_transaction(&new_recurring)
            .await
    }

    async fn update_recurring_transaction(
        &self,
        recurring_id: &str,
        update: NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        Self::validate_recurring_fields(&update)?;
        update.schedule().validate_window()?;
        self.transaction_api
            .update_recurring_transaction(recurring_id, &update)
            .await
    }

    async fn delete_recurring_transaction(&self, recurring_id: &str) -> Result<()> {
        self.transaction_api
            .delete_recurring_transaction(recurring_id)
            .await
    }

    async fn set_recurring_active(
        &self,
        recurring_id: &str,
        is_active: bool,
    ) -> Result<RecurringTransaction> {
        let existing = self
            .transaction_api
            .list_recurring_transactions()
            .await?
            .into_iter()
            .find(|r| r.id == recurring_id)
            .ok_or_else(|| {
                ApiError::NotFound(format!("recurring transaction {}", recurring_id))
            })?;

        if existing.is_active == is_active {
            return Ok(existing);
        }

        let mut update = existing.to_update();
        update.is_active = is_active;
        info!(
            "{} recurring transaction {}",
            if is_active { "Resuming" } else { "Pausing" },
            recurring_id
        );
        self.transaction_api
            .update_recurring_transaction(recurring_id, &update)
            .await
    }

    async fn get_upcoming(
        &self,
        today: NaiveDate,
        horizon_days: u32,
    ) -> Result<Vec<UpcomingTransaction>> {
        let horizon = today
            .checked_add_days(Days::new(u64::from(horizon_days)))
            .unwrap_or(NaiveDate::MAX);

        let mut upcoming: Vec<UpcomingTransaction> = self
            .transaction_api
            .list_recurring_transactions()
            .await?
            .into_iter()
            .filter_map(|recurring| {
                let due_date = recurring.next_due(today)?;
                (due_date <= horizon).then_some(UpcomingTransaction {
                    recurring,
                    due_date,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(upcoming)
    }
}
