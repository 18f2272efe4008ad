//! Store, engine, and external-collaborator services for invoice-tracker.

pub mod engine;
pub mod seed;
pub mod storage;
pub mod store;

pub use seed::{HttpSeedSource, SeedSource, StaticSeed};
pub use storage::{JsonFileSlot, MemorySlot, StorageSlot};
pub use store::InvoiceStore;
