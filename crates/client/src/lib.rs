//! SpendSmart Client - HTTP access to the SpendSmart backend.
//!
//! [`SpendSmartApiClient`] implements the API traits defined in
//! `spendsmart-core` (goals, transactions, admin, reports), so the core
//! services can run against the real backend or against test doubles.

mod admin;
mod client;
pub mod config;
mod goals;
mod reports;
mod transactions;

pub use client::SpendSmartApiClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
