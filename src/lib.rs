//! invoice-tracker: local-first invoice store with derived payment status
//! and summary aggregation.

pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
