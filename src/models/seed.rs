//! Seed data shapes: the static summary records imported into an empty
//! collection on first run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Coarse four-way status carried by seed records. Note the source data
/// spells it "uncollectable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedStatus {
    Paid,
    Awaiting,
    Overdue,
    Uncollectable,
}

/// One record of the external seed data set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedInvoice {
    pub id: String,
    pub client: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total: Decimal,
    pub amount_due: Decimal,
    pub status: SeedStatus,
}
