use chrono::Utc;
use tracing::info;

use invoice_tracker::config::Config;
use invoice_tracker::error::AppError;
use invoice_tracker::observability::init_tracing;
use invoice_tracker::services::engine;
use invoice_tracker::services::{HttpSeedSource, InvoiceStore, JsonFileSlot};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::load()?;
    init_tracing(&config.log_level);

    let slot = JsonFileSlot::new(&config.storage_path);
    let seeds = HttpSeedSource::new(config.seed_url.clone());
    let store = InvoiceStore::open(Box::new(slot), &seeds).await?;

    let today = Utc::now().date_naive();
    let summary = engine::aggregate(store.list(), today);
    let counts = engine::category_counts(store.list(), today);
    let pages = engine::total_pages(store.len(), config.page_size);

    info!(
        invoices = store.len(),
        pages = pages,
        outstanding = %summary.outstanding,
        overdue = %summary.overdue,
        collectible = %summary.collectible,
        uncollectible = %summary.uncollectible,
        open_count = counts.outstanding,
        paid_count = counts.paid,
        "Invoice collection ready"
    );

    Ok(())
}
