//! Transaction, category and recurring-transaction endpoints.

use async_trait::async_trait;
use log::info;

use spendsmart_core::errors::Result;
use spendsmart_core::transactions::{
    Category, NewRecurringTransaction, NewTransaction, RecurringTransaction, Transaction,
    TransactionApiTrait, TransactionFilter,
};

use crate::client::{segment, SpendSmartApiClient};

#[async_trait]
impl TransactionApiTrait for SpendSmartApiClient {
    async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
        let transactions: Vec<Transaction> = self
            .get("/api/transactions", &filter.query_pairs())
            .await?;
        info!("[SpendSmartApi] Fetched {} transactions", transactions.len());
        Ok(transactions)
    }

    async fn create_transaction(&self, new_transaction: &NewTransaction) -> Result<Transaction> {
        self.post("/api/transactions", new_transaction).await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.delete(&format!("/api/transactions/{}", segment(transaction_id))).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.get("/api/categories", &[]).await
    }

    async fn list_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>> {
        self.get("/api/recurring-transactions", &[]).await
    }

    async fn create_recurring_transaction(
        &self,
        new_recurring: &NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        self.post("/api/recurring-transactions", new_recurring).await
    }

    async fn update_recurring_transaction(
        &self,
        recurring_id: &str,
        update: &NewRecurringTransaction,
    ) -> Result<RecurringTransaction> {
        self.put(
            &format!("/api/recurring-transactions/{}", segment(recurring_id)),
            update,
        )
        .await
    }

    async fn delete_recurring_transaction(&self, recurring_id: &str) -> Result<()> {
        self.delete(&format!(
            "/api/recurring-transactions/{}",
            segment(recurring_id)
        ))
        .await
    }
}
