//! Invoice store: the canonical ordered collection, its invariants, and
//! its persistence to the storage slot.

use std::collections::HashSet;

use chrono::Duration;
use rand::Rng;
use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::models::{Invoice, InvoiceForm, LineItem, StoredStatus};
use crate::services::seed::{invoice_from_seed, SeedSource};
use crate::services::storage::StorageSlot;

const ID_LENGTH: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Owns the in-memory invoice collection and writes it through to the
/// storage slot on every mutation. Exactly one writer exists per slot for
/// the life of a session, so mutations need no coordination.
pub struct InvoiceStore {
    invoices: Vec<Invoice>,
    slot: Box<dyn StorageSlot>,
}

impl InvoiceStore {
    /// Open the store over a slot. If the slot is empty, performs the
    /// one-time seed import; a seed fetch failure is logged and the store
    /// simply starts empty (no retry).
    pub async fn open(
        slot: Box<dyn StorageSlot>,
        seeds: &dyn SeedSource,
    ) -> Result<Self, AppError> {
        let invoices = slot.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read storage slot, starting empty");
            Vec::new()
        });

        let mut store = Self { invoices, slot };

        if store.invoices.is_empty() {
            match seeds.fetch().await {
                Ok(records) => {
                    let mut taken: HashSet<String> =
                        records.iter().map(|r| r.id.clone()).collect();
                    store.invoices = records
                        .into_iter()
                        .map(|record| {
                            let item_id = mint_token(&mut taken);
                            invoice_from_seed(record, item_id)
                        })
                        .collect();
                    info!(count = store.invoices.len(), "Seed data imported");
                    store.persist();
                }
                Err(e) => {
                    warn!(error = %e, "Seed fetch failed, starting with empty collection");
                }
            }
        } else {
            info!(count = store.invoices.len(), "Invoice collection loaded");
        }

        Ok(store)
    }

    /// Full snapshot in insertion order.
    pub fn list(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    /// Invoices with the given stored status, or the full snapshot when
    /// `status` is `None`.
    pub fn list_by_status(&self, status: Option<StoredStatus>) -> Vec<&Invoice> {
        match status {
            None => self.invoices.iter().collect(),
            Some(s) => self.invoices.iter().filter(|inv| inv.status == s).collect(),
        }
    }

    /// Create an invoice from form data: fresh ids for the invoice and
    /// every line item, derived fields recomputed, appended, persisted.
    #[instrument(skip(self, form))]
    pub fn create(&mut self, form: InvoiceForm) -> Invoice {
        let mut taken = HashSet::new();
        let id = self.mint_unique(&mut taken);
        let invoice = self.build_invoice(id, form, &mut taken);

        self.invoices.push(invoice.clone());
        self.persist();
        info!(invoice_id = %invoice.id, total = %invoice.total, "Invoice created");
        invoice
    }

    /// Replace every field except `id`. Line items get fresh ids; an edit
    /// discards prior item identities, matching the stored format's
    /// behavior. Returns `None` (and changes nothing) if `id` is absent.
    #[instrument(skip(self, form))]
    pub fn update(&mut self, id: &str, form: InvoiceForm) -> Option<Invoice> {
        let position = self.invoices.iter().position(|inv| inv.id == id)?;

        let mut taken = HashSet::new();
        let invoice = self.build_invoice(id.to_string(), form, &mut taken);

        self.invoices[position] = invoice.clone();
        self.persist();
        info!(invoice_id = %invoice.id, "Invoice updated");
        Some(invoice)
    }

    /// Hard delete. Returns whether a record was removed.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.invoices.len();
        self.invoices.retain(|inv| inv.id != id);
        let removed = self.invoices.len() < before;
        if removed {
            self.persist();
            info!(invoice_id = %id, "Invoice deleted");
        }
        removed
    }

    /// Overwrite only the stored status. Any target value is accepted;
    /// transition legality is the caller's concern. Returns whether the
    /// record existed.
    #[instrument(skip(self))]
    pub fn set_status(&mut self, id: &str, status: StoredStatus) -> bool {
        let Some(invoice) = self.invoices.iter_mut().find(|inv| inv.id == id) else {
            return false;
        };
        invoice.status = status;
        self.persist();
        info!(invoice_id = %id, status = status.as_str(), "Invoice status changed");
        true
    }

    /// Assemble an invoice from form data, recomputing every derived
    /// field: item totals, invoice total, and payment due date.
    fn build_invoice(
        &self,
        id: String,
        form: InvoiceForm,
        taken: &mut HashSet<String>,
    ) -> Invoice {
        let items: Vec<LineItem> = form
            .items
            .iter()
            .map(|item| LineItem {
                id: self.mint_unique(taken),
                name: item.name.clone(),
                quantity: item.quantity,
                price: item.price,
                total: item.line_total(),
            })
            .collect();
        let total = items.iter().map(|item| item.total).sum();

        Invoice {
            id,
            created_at: form.created_at,
            payment_due: form.created_at + Duration::days(form.payment_terms),
            description: form.description,
            payment_terms: form.payment_terms,
            client_name: form.client_name,
            client_email: form.client_email,
            status: form.status,
            sender_address: form.sender_address,
            client_address: form.client_address,
            items,
            total,
        }
    }

    /// Mint a token unique against the whole collection and the ids minted
    /// so far in this batch.
    fn mint_unique(&self, taken: &mut HashSet<String>) -> String {
        loop {
            let token = random_token();
            if !taken.contains(&token) && !self.id_in_use(&token) {
                taken.insert(token.clone());
                return token;
            }
        }
    }

    fn id_in_use(&self, token: &str) -> bool {
        self.invoices
            .iter()
            .any(|inv| inv.id == token || inv.items.iter().any(|item| item.id == token))
    }

    /// Serialize the whole collection to the slot. A write failure is
    /// logged and swallowed; the in-memory state stays authoritative for
    /// the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.slot.save(&self.invoices) {
            warn!(error = %e, "Failed to persist invoice collection, in-memory state remains authoritative");
        }
    }
}

/// Mint a token against a standalone taken-set, for use before a store
/// exists (seed import).
fn mint_token(taken: &mut HashSet<String>) -> String {
    loop {
        let token = random_token();
        if !taken.contains(&token) {
            taken.insert(token.clone());
            return token;
        }
    }
}
