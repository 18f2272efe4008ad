//! Persistence slot: a single key holding the whole invoice collection as
//! a JSON array, read once at startup and overwritten wholesale on every
//! mutation.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::Invoice;

/// A durable local slot for the invoice collection. No partial writes, no
/// schema versioning.
pub trait StorageSlot {
    /// Read the stored collection. An absent slot is an empty collection.
    fn load(&self) -> Result<Vec<Invoice>, AppError>;

    /// Replace the stored collection wholesale.
    fn save(&self, invoices: &[Invoice]) -> Result<(), AppError>;
}

/// File-backed slot: one JSON file holds the entire collection.
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StorageSlot for JsonFileSlot {
    fn load(&self) -> Result<Vec<Invoice>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, invoices: &[Invoice]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(invoices)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory slot. Used by tests to observe what the store persists and to
/// simulate write failures (quota exceeded and the like).
#[derive(Clone, Default)]
pub struct MemorySlot {
    data: Arc<Mutex<Vec<Invoice>>>,
    fail_saves: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot whose every write fails.
    pub fn failing() -> Self {
        Self {
            data: Arc::new(Mutex::new(Vec::new())),
            fail_saves: true,
        }
    }

    /// Pre-populate the slot, as if a previous session had persisted.
    pub fn with_invoices(invoices: Vec<Invoice>) -> Self {
        Self {
            data: Arc::new(Mutex::new(invoices)),
            fail_saves: false,
        }
    }

    /// Shared handle onto the stored data, for post-hoc assertions.
    pub fn handle(&self) -> Arc<Mutex<Vec<Invoice>>> {
        Arc::clone(&self.data)
    }
}

impl StorageSlot for MemorySlot {
    fn load(&self) -> Result<Vec<Invoice>, AppError> {
        let data = self
            .data
            .lock()
            .map_err(|_| AppError::Storage(anyhow::anyhow!("slot lock poisoned")))?;
        Ok(data.clone())
    }

    fn save(&self, invoices: &[Invoice]) -> Result<(), AppError> {
        if self.fail_saves {
            return Err(AppError::Storage(anyhow::anyhow!("slot write refused")));
        }
        let mut data = self
            .data
            .lock()
            .map_err(|_| AppError::Storage(anyhow::anyhow!("slot lock poisoned")))?;
        *data = invoices.to_vec();
        Ok(())
    }
}
