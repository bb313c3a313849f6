//! SpendSmart Core - Domain entities, services, and traits.
//!
//! This crate contains the client-side business logic for SpendSmart: typed
//! models for the backend's JSON, goal progress evaluation, recurring schedule
//! validation, and services layered over the API traits that the
//! `spendsmart-client` crate implements over HTTP.

pub mod admin;
pub mod errors;
pub mod goals;
pub mod reports;
pub mod transactions;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
