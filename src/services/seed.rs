//! Seed data source: read-only external collaborator consulted at most
//! once, when the persistence slot is empty at startup.

use async_trait::async_trait;
use tracing::info;

use crate::error::AppError;
use crate::models::{Address, Invoice, LineItem, SeedInvoice, SeedStatus, StoredStatus};

#[async_trait]
pub trait SeedSource {
    async fn fetch(&self) -> Result<Vec<SeedInvoice>, AppError>;
}

/// Fetches the seed data set as a JSON array over HTTP.
pub struct HttpSeedSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<SeedInvoice>, AppError> {
        let records = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<SeedInvoice>>()
            .await?;
        info!(url = %self.url, count = records.len(), "Seed data fetched");
        Ok(records)
    }
}

/// Fixed in-memory seed set. Used by tests and offline runs.
#[derive(Default)]
pub struct StaticSeed {
    records: Vec<SeedInvoice>,
}

impl StaticSeed {
    pub fn new(records: Vec<SeedInvoice>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn fetch(&self) -> Result<Vec<SeedInvoice>, AppError> {
        Ok(self.records.clone())
    }
}

/// Collapse the seed's four-way status into the stored three-way status:
/// paid stays paid, awaiting and overdue were in flight, anything else is
/// treated as a draft.
pub fn collapse_status(status: SeedStatus) -> StoredStatus {
    match status {
        SeedStatus::Paid => StoredStatus::Paid,
        SeedStatus::Awaiting | SeedStatus::Overdue => StoredStatus::Pending,
        SeedStatus::Uncollectable => StoredStatus::Draft,
    }
}

/// Synthesize a client email from the client name: lowercased, whitespace
/// collapsed to dots.
pub fn client_email_for(client: &str) -> String {
    let local = client
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(".");
    format!("{}@example.com", local)
}

fn default_sender_address() -> Address {
    Address {
        street: "19 Union Terrace".to_string(),
        city: "London".to_string(),
        post_code: "E1 3EZ".to_string(),
        country: "United Kingdom".to_string(),
    }
}

fn default_client_address() -> Address {
    Address {
        street: "123 Client Street".to_string(),
        city: "London".to_string(),
        post_code: "SW1A 1AA".to_string(),
        country: "United Kingdom".to_string(),
    }
}

/// Expand one seed summary record into a full invoice. The seed carries no
/// addresses or line items, so placeholders are synthesized: a single
/// "Service Fee" item priced at the seed total. `item_id` is minted by the
/// caller so uniqueness can be guaranteed against the whole collection.
pub fn invoice_from_seed(record: SeedInvoice, item_id: String) -> Invoice {
    let payment_terms = (record.due_date - record.issue_date).num_days();
    let item = LineItem {
        id: item_id,
        name: "Service Fee".to_string(),
        quantity: 1,
        price: record.total,
        total: record.total,
    };

    Invoice {
        id: record.id,
        created_at: record.issue_date,
        payment_due: record.due_date,
        description: format!("Invoice for {}", record.client),
        payment_terms,
        client_email: client_email_for(&record.client),
        client_name: record.client,
        status: collapse_status(record.status),
        sender_address: default_sender_address(),
        client_address: default_client_address(),
        items: vec![item],
        total: record.total,
    }
}
