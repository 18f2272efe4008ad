//! Line item model for invoice-tracker.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line item on an invoice. `total` is derived (`quantity * price`) and
/// recomputed by the store on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub total: Decimal,
}

/// Input for a line item within an invoice form. Ids and totals are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct LineItemForm {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

impl LineItemForm {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}
