//! Invoice model for invoice-tracker.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LineItem, LineItemForm};

/// Postal address, owned inline by an invoice (sender or client side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub post_code: String,
    pub country: String,
}

/// Persisted three-value invoice state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoredStatus {
    Draft,
    Pending,
    Paid,
}

impl StoredStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoredStatus::Draft => "draft",
            StoredStatus::Pending => "pending",
            StoredStatus::Paid => "paid",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "pending" => StoredStatus::Pending,
            "paid" => StoredStatus::Paid,
            _ => StoredStatus::Draft,
        }
    }
}

/// Five-value status derived at read time from the stored status and the
/// due date. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayStatus {
    Draft,
    AwaitingPayment,
    Overdue,
    Paid,
    Uncollectible,
}

impl DisplayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStatus::Draft => "Draft",
            DisplayStatus::AwaitingPayment => "Awaiting Payment",
            DisplayStatus::Overdue => "Overdue",
            DisplayStatus::Paid => "Paid",
            DisplayStatus::Uncollectible => "Uncollectible",
        }
    }
}

impl std::fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invoice record. `payment_due`, item totals, and `total` are derived
/// fields persisted redundantly; the store recomputes them on every
/// create/update and never trusts them from input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub created_at: NaiveDate,
    pub payment_due: NaiveDate,
    pub description: String,
    pub payment_terms: i64,
    pub client_name: String,
    pub client_email: String,
    pub status: StoredStatus,
    pub sender_address: Address,
    pub client_address: Address,
    pub items: Vec<LineItem>,
    pub total: Decimal,
}

/// Input for creating or updating an invoice. Derived fields are absent;
/// the store computes them. Presence validation of required fields is the
/// caller's responsibility.
#[derive(Debug, Clone)]
pub struct InvoiceForm {
    pub created_at: NaiveDate,
    pub description: String,
    pub payment_terms: i64,
    pub client_name: String,
    pub client_email: String,
    pub status: StoredStatus,
    pub sender_address: Address,
    pub client_address: Address,
    pub items: Vec<LineItemForm>,
}
