//! Domain models for invoice-tracker.

mod invoice;
mod line_item;
mod seed;

pub use invoice::{Address, DisplayStatus, Invoice, InvoiceForm, StoredStatus};
pub use line_item::{LineItem, LineItemForm};
pub use seed::{SeedInvoice, SeedStatus};
