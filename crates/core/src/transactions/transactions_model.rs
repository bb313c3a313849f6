//! Transaction domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reports::ReportPeriod;

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Sign applied to amounts of this type when netting.
    pub fn sign(&self) -> f64 {
        match self {
            TransactionType::Income => 1.0,
            TransactionType::Expense => -1.0,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// Domain model representing a transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category_id: String,
    #[serde(default)]
    pub category_name: Option<String>,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Amount with income positive and expense negative.
    pub fn signed_amount(&self) -> f64 {
        self.transaction_type.sign() * self.amount
    }
}

/// Input model for creating a new transaction
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub amount: f64,
    pub transaction_type: TransactionType,
    pub category_id: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Transaction category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub category_type: TransactionType,
}

/// Filters forwarded to the transaction list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub month: Option<ReportPeriod>,
    pub transaction_type: Option<TransactionType>,
    pub category_id: Option<String>,
}

impl TransactionFilter {
    /// Query parameters in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(month) = self.month {
            params.push(("month", month.to_string()));
        }
        if let Some(kind) = self.transaction_type {
            params.push(("type", kind.as_str().to_string()));
        }
        if let Some(category_id) = &self.category_id {
            params.push(("categoryId", category_id.clone()));
        }
        params
    }
}
