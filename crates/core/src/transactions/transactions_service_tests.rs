//! Tests for the transaction service.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result, ValidationError};
    use crate::reports::ReportPeriod;
    use crate::transactions::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    // ============================================================================
    // Mock API
    // ============================================================================

    #[derive(Default)]
    struct MockTransactionApi {
        transactions: Vec<Transaction>,
        recurring: Mutex<Vec<RecurringTransaction>>,
        last_filter: Mutex<Option<TransactionFilter>>,
        created: Mutex<Vec<NewTransaction>>,
        recurring_updates: Mutex<Vec<(String, NewRecurringTransaction)>>,
    }

    #[async_trait]
    impl TransactionApiTrait for MockTransactionApi {
        async fn list_transactions(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>> {
            *self.last_filter.lock().unwrap() = Some(filter.clone());
            Ok(self.transactions.clone())
        }

        async fn create_transaction(
            &self,
            new_transaction: &NewTransaction,
        ) -> Result<Transaction> {
            self.created.lock().unwrap().push(new_transaction.clone());
            Ok(Transaction {
                id: "t-new".to_string(),
                amount: new_transaction.amount,
                transaction_type: new_transaction.transaction_type,
                category_id: new_transaction.category_id.clone(),
                category_name: None,
                description: new_transaction.description.clone(),
                date: new_transaction.date,
            })
        }

        async fn delete_transaction(&self, _transaction_id: &str) -> Result<()> {
            Ok(())
        }

        async fn list_categories(&self) -> Result<Vec<Category>> {
            Ok(vec![Category {
                id: "food".to_string(),
                name: "Food".to_string(),
                category_type: TransactionType::Expense,
            }])
        }

        async fn list_recurring_transactions(&self) -> Result<Vec<RecurringTransaction>> {
            Ok(self.recurring.lock().unwrap().clone())
        }

        async fn create_recurring_transaction(
            &self,
            new_recurring: &NewRecurringTransaction,
        ) -> Result<RecurringTransaction> {
            let created = from_update("rec-new", new_recurring);
            self.recurring.lock().unwrap().push(created.clone());
            Ok(created)
        }

        async fn update_recurring_transaction(
            &self,
            recurring_id: &str,
            update: &NewRecurringTransaction,
        ) -> Result<RecurringTransaction> {
            self.recurring_updates
                .lock()
                .unwrap()
                .push((recurring_id.to_string(), update.clone()));
            Ok(from_update(recurring_id, update))
        }

        async fn delete_recurring_transaction(&self, _recurring_id: &str) -> Result<()> {
            Ok(())
        }
    }

    // ============================================================================
    // Fixtures
    // ============================================================================

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn from_update(id: &str, update: &NewRecurringTransaction) -> RecurringTransaction {
        RecurringTransaction {
            id: id.to_string(),
            amount: update.amount,
            transaction_type: update.transaction_type,
            category_id: update.category_id.clone(),
            description: update.description.clone(),
            frequency: update.frequency,
            start_date: update.start_date,
            end_date: update.end_date,
            next_due_date: None,
            is_active: update.is_active,
        }
    }

    fn tx(id: &str, day: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount: 10.0,
            transaction_type: TransactionType::Expense,
            category_id: "food".to_string(),
            category_name: Some("Food".to_string()),
            description: "Lunch".to_string(),
            date: date(2024, 5, day),
        }
    }

    fn new_tx(amount: f64, description: &str) -> NewTransaction {
        NewTransaction {
            amount,
            transaction_type: TransactionType::Expense,
            category_id: "food".to_string(),
            description: description.to_string(),
            date: date(2024, 5, 1),
        }
    }

    fn new_recurring(
        frequency: Frequency,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> NewRecurringTransaction {
        NewRecurringTransaction {
            amount: 50.0,
            transaction_type: TransactionType::Expense,
            category_id: "subscriptions".to_string(),
            description: "Streaming".to_string(),
            frequency,
            start_date: start,
            end_date: end,
            is_active: true,
        }
    }

    // ============================================================================
    // Transactions
    // ============================================================================

    #[tokio::test]
    async fn test_transactions_sorted_newest_first_and_filter_forwarded() {
        let api = Arc::new(MockTransactionApi {
            transactions: vec![tx("a", 3), tx("b", 20), tx("c", 11)],
            ..Default::default()
        });
        let service = TransactionService::new(api.clone());
        let filter = TransactionFilter {
            month: Some(ReportPeriod::new(2024, 5).unwrap()),
            ..Default::default()
        };

        let list = service.get_transactions(filter.clone()).await.unwrap();

        let ids: Vec<&str> = list.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(api.last_filter.lock().unwrap().as_ref(), Some(&filter));
    }

    #[tokio::test]
    async fn test_create_transaction_validation() {
        let api = Arc::new(MockTransactionApi::default());
        let service = TransactionService::new(api.clone());

        assert!(matches!(
            service.create_transaction(new_tx(0.0, "Lunch")).await,
            Err(Error::Validation(ValidationError::InvalidAmount { .. }))
        ));
        assert!(matches!(
            service.create_transaction(new_tx(12.0, "  ")).await,
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
        assert!(api.created.lock().unwrap().is_empty());

        let created = service.create_transaction(new_tx(12.0, "Lunch")).await.unwrap();
        assert_eq!(created.amount, 12.0);
    }

    #[tokio::test]
    async fn test_categories_passthrough() {
        let service = TransactionService::new(Arc::new(MockTransactionApi::default()));
        let categories = service.get_categories().await.unwrap();
        assert_eq!(categories[0].name, "Food");
    }

    // ============================================================================
    // Recurring transactions
    // ============================================================================

    #[tokio::test]
    async fn test_create_recurring_checks_window() {
        let api = Arc::new(MockTransactionApi::default());
        let service = TransactionService::new(api.clone());
        let today = date(2024, 5, 1);

        let past = new_recurring(Frequency::Monthly, date(2024, 4, 1), None);
        assert!(matches!(
            service.create_recurring_transaction(past, today).await,
            Err(Error::Validation(ValidationError::InvalidDateWindow(_)))
        ));

        let too_short = new_recurring(Frequency::Yearly, today, Some(date(2024, 12, 31)));
        assert!(service
            .create_recurring_transaction(too_short, today)
            .await
            .is_err());
        assert!(api.recurring.lock().unwrap().is_empty());

        let ok = new_recurring(Frequency::Weekly, today, Some(date(2024, 8, 1)));
        let created = service
            .create_recurring_transaction(ok, today)
            .await
            .unwrap();
        assert_eq!(created.frequency, Frequency::Weekly);
    }

    #[tokio::test]
    async fn test_update_recurring_allows_past_start() {
        let api = Arc::new(MockTransactionApi::default());
        let service = TransactionService::new(api.clone());

        let update = new_recurring(Frequency::Monthly, date(2020, 1, 1), None);
        assert!(service
            .update_recurring_transaction("rec-1", update)
            .await
            .is_ok());

        let inverted = new_recurring(Frequency::Monthly, date(2020, 1, 1), Some(date(2019, 1, 1)));
        assert!(service
            .update_recurring_transaction("rec-1", inverted)
            .await
            .is_err());
        assert_eq!(api.recurring_updates.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_recurring_active() {
        let api = Arc::new(MockTransactionApi::default());
        api.recurring.lock().unwrap().push(from_update(
            "rec-1",
            &new_recurring(Frequency::Monthly, date(2024, 1, 1), None),
        ));
        let service = TransactionService::new(api.clone());

        // Already active: no update is sent.
        let unchanged = service.set_recurring_active("rec-1", true).await.unwrap();
        assert!(unchanged.is_active);
        assert!(api.recurring_updates.lock().unwrap().is_empty());

        let paused = service.set_recurring_active("rec-1", false).await.unwrap();
        assert!(!paused.is_active);
        let updates = api.recurring_updates.lock().unwrap();
        assert_eq!(updates.len(), 1);
        assert!(!updates[0].1.is_active);
    }

    #[tokio::test]
    async fn test_set_recurring_active_unknown_id() {
        let service = TransactionService::new(Arc::new(MockTransactionApi::default()));
        let err = service.set_recurring_active("nope", false).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_upcoming_within_horizon() {
        let api = Arc::new(MockTransactionApi::default());
        {
            let mut recurring = api.recurring.lock().unwrap();
            recurring.push(from_update(
                "monthly",
                &new_recurring(Frequency::Monthly, date(2024, 1, 20), None),
            ));
            recurring.push(from_update(
                "weekly",
                &new_recurring(Frequency::Weekly, date(2024, 5, 3), None),
            ));
            let mut paused = from_update(
                "paused",
                &new_recurring(Frequency::Daily, date(2024, 1, 1), None),
            );
            paused.is_active = false;
            recurring.push(paused);
            recurring.push(from_update(
                "finished",
                &new_recurring(Frequency::Daily, date(2024, 1, 1), Some(date(2024, 2, 1))),
            ));
        }
        let service = TransactionService::new(api);

        let upcoming = service.get_upcoming(date(2024, 5, 14), 7).await.unwrap();

        let ids: Vec<(&str, NaiveDate)> = upcoming
            .iter()
            .map(|u| (u.recurring.id.as_str(), u.due_date))
            .collect();
        assert_eq!(
            ids,
            vec![("weekly", date(2024, 5, 17)), ("monthly", date(2024, 5, 20))]
        );
    }
}
