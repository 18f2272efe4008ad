//! Invoice store CRUD and persistence tests.

mod common;

use common::{date, form, invoice, item};
use rust_decimal::Decimal;

use invoice_tracker::models::{SeedInvoice, SeedStatus, StoredStatus};
use invoice_tracker::services::{InvoiceStore, MemorySlot, StaticSeed};

async fn empty_store() -> InvoiceStore {
    InvoiceStore::open(Box::new(MemorySlot::new()), &StaticSeed::empty())
        .await
        .expect("open store")
}

#[tokio::test]
async fn create_recomputes_derived_fields() {
    let mut store = empty_store().await;

    let created = store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![
            item("Design", 2, Decimal::new(2550, 2)),
            item("Hosting", 1, Decimal::from(100)),
        ],
    ));

    assert_eq!(created.payment_due, date(2025, 7, 1));
    assert_eq!(created.items.len(), 2);
    assert_eq!(created.items[0].total, Decimal::new(5100, 2));
    assert_eq!(created.items[1].total, Decimal::from(100));
    assert_eq!(created.total, Decimal::new(15100, 2));
    assert_eq!(created.id.len(), 7);
    assert_eq!(created.items[0].id.len(), 7);
    assert_ne!(created.items[0].id, created.items[1].id);
    assert_ne!(created.id, created.items[0].id);
}

#[tokio::test]
async fn create_then_get_returns_equal_record() {
    let mut store = empty_store().await;

    let created = store.create(form(
        "Acme",
        StoredStatus::Draft,
        date(2025, 6, 1),
        14,
        vec![item("Design", 1, Decimal::from(250))],
    ));

    let fetched = store.get(&created.id).expect("invoice present");
    assert_eq!(fetched, &created);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn update_preserves_id_and_regenerates_item_ids() {
    let mut store = empty_store().await;

    let created = store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));
    let old_item_id = created.items[0].id.clone();

    let updated = store
        .update(
            &created.id,
            form(
                "Globex",
                StoredStatus::Pending,
                date(2025, 6, 10),
                7,
                vec![item("Design", 3, Decimal::from(250))],
            ),
        )
        .expect("invoice present");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.client_name, "Globex");
    assert_eq!(updated.payment_due, date(2025, 6, 17));
    assert_eq!(updated.total, Decimal::from(750));
    // An edit discards prior line-item identities.
    assert_ne!(updated.items[0].id, old_item_id);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn update_missing_id_changes_nothing() {
    let mut store = empty_store().await;
    store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));

    let result = store.update(
        "MISSING",
        form(
            "Globex",
            StoredStatus::Paid,
            date(2025, 6, 1),
            30,
            vec![item("Design", 1, Decimal::from(999))],
        ),
    );

    assert!(result.is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].client_name, "Acme");
}

#[tokio::test]
async fn remove_deletes_exactly_one_record() {
    let mut store = empty_store().await;
    let a = store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));
    store.create(form(
        "Globex",
        StoredStatus::Draft,
        date(2025, 6, 2),
        14,
        vec![item("Hosting", 1, Decimal::from(50))],
    ));

    assert!(store.remove(&a.id));
    assert_eq!(store.len(), 1);
    assert!(store.get(&a.id).is_none());

    assert!(!store.remove(&a.id));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn set_status_overwrites_only_status() {
    let mut store = empty_store().await;
    let created = store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));

    assert!(store.set_status(&created.id, StoredStatus::Paid));

    let fetched = store.get(&created.id).expect("invoice present");
    assert_eq!(fetched.status, StoredStatus::Paid);
    assert_eq!(fetched.total, created.total);
    assert_eq!(fetched.items, created.items);

    assert!(!store.set_status("MISSING", StoredStatus::Paid));
}

#[tokio::test]
async fn list_by_status_filters_on_stored_status() {
    let mut store = empty_store().await;
    store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));
    store.create(form(
        "Globex",
        StoredStatus::Draft,
        date(2025, 6, 2),
        14,
        vec![item("Hosting", 1, Decimal::from(50))],
    ));

    assert_eq!(store.list_by_status(None).len(), 2);
    let drafts = store.list_by_status(Some(StoredStatus::Draft));
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].client_name, "Globex");
    assert!(store.list_by_status(Some(StoredStatus::Paid)).is_empty());
}

#[tokio::test]
async fn every_mutation_writes_through_to_the_slot() {
    let slot = MemorySlot::new();
    let handle = slot.handle();
    let mut store = InvoiceStore::open(Box::new(slot), &StaticSeed::empty())
        .await
        .expect("open store");

    let created = store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));
    assert_eq!(handle.lock().unwrap().len(), 1);

    store.set_status(&created.id, StoredStatus::Paid);
    assert_eq!(handle.lock().unwrap()[0].status, StoredStatus::Paid);

    store.remove(&created.id);
    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn persistence_failure_keeps_in_memory_state() {
    let mut store = InvoiceStore::open(Box::new(MemorySlot::failing()), &StaticSeed::empty())
        .await
        .expect("open store");

    let created = store.create(form(
        "Acme",
        StoredStatus::Pending,
        date(2025, 6, 1),
        30,
        vec![item("Design", 1, Decimal::from(250))],
    ));

    // The write failed silently; the session state is still authoritative.
    assert_eq!(store.len(), 1);
    assert!(store.get(&created.id).is_some());
}

#[tokio::test]
async fn populated_slot_skips_seed_import() {
    let existing = invoice("RT3080", "Acme", StoredStatus::Pending, date(2025, 7, 1), 500);
    let slot = MemorySlot::with_invoices(vec![existing.clone()]);

    let seed = StaticSeed::new(vec![SeedInvoice {
        id: "XX9999".to_string(),
        client: "Globex".to_string(),
        issue_date: date(2024, 1, 1),
        due_date: date(2024, 1, 31),
        total: Decimal::from(900),
        amount_due: Decimal::from(900),
        status: SeedStatus::Awaiting,
    }]);

    let store = InvoiceStore::open(Box::new(slot), &seed)
        .await
        .expect("open store");

    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0], existing);
}
