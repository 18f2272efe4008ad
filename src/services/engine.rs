//! Status & aggregation engine: pure, stateless computation over a
//! snapshot of invoices. No mutation, no persistence, and no hidden reads
//! of the wall clock; `today` is always an explicit parameter.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{DisplayStatus, Invoice, StoredStatus};

/// Dashboard tab: the main invoice list excludes drafts, the draft tab
/// shows only drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Invoices,
    Draft,
}

/// Summary-filter category over the derived display status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    Outstanding,
    Paid,
    Uncollectible,
}

/// Aggregate amounts per derived-status bucket. The buckets are four
/// independent sums; overdue and uncollectible overlap for the tail older
/// than three months (observed source behavior, kept as-is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub overdue: Decimal,
    pub outstanding: Decimal,
    pub collectible: Decimal,
    pub uncollectible: Decimal,
}

/// Per-category record counts over the non-draft subset, for filter badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    pub all: usize,
    pub outstanding: usize,
    pub paid: usize,
    pub uncollectible: usize,
}

fn three_months_before(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(3))
        .unwrap_or(NaiveDate::MIN)
}

/// Derive the display status. Rules are evaluated in order; date
/// comparisons are date-only.
pub fn display_status(invoice: &Invoice, today: NaiveDate) -> DisplayStatus {
    if invoice.status == StoredStatus::Paid {
        return DisplayStatus::Paid;
    }

    if invoice.status == StoredStatus::Draft {
        if invoice.payment_due < three_months_before(today) {
            return DisplayStatus::Uncollectible;
        }
        return DisplayStatus::Draft;
    }

    if invoice.payment_due < today {
        DisplayStatus::Overdue
    } else {
        DisplayStatus::AwaitingPayment
    }
}

pub fn filter_by_tab(invoices: &[Invoice], tab: Tab) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|inv| match tab {
            Tab::Invoices => inv.status != StoredStatus::Draft,
            Tab::Draft => inv.status == StoredStatus::Draft,
        })
        .cloned()
        .collect()
}

pub fn filter_by_category(invoices: &[Invoice], category: Category, today: NaiveDate) -> Vec<Invoice> {
    invoices
        .iter()
        .filter(|inv| match category {
            Category::All => true,
            Category::Outstanding => matches!(
                display_status(inv, today),
                DisplayStatus::AwaitingPayment | DisplayStatus::Overdue
            ),
            Category::Paid => display_status(inv, today) == DisplayStatus::Paid,
            Category::Uncollectible => display_status(inv, today) == DisplayStatus::Uncollectible,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring match on invoice id or client name. An empty
/// query passes everything through.
pub fn search(invoices: &[Invoice], query: &str) -> Vec<Invoice> {
    if query.is_empty() {
        return invoices.to_vec();
    }
    let query = query.to_lowercase();
    invoices
        .iter()
        .filter(|inv| {
            inv.id.to_lowercase().contains(&query)
                || inv.client_name.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// 1-based pagination. An out-of-range page (including page 0) yields an
/// empty result, never an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Page count by ceiling division; an empty collection has zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Four independent sums over the full set. Collectible is computed on its
/// own terms (due today or later), not as outstanding minus overdue.
pub fn aggregate(invoices: &[Invoice], today: NaiveDate) -> Summary {
    let unpaid = |inv: &&Invoice| inv.status == StoredStatus::Pending || inv.status == StoredStatus::Draft;
    let cutoff = three_months_before(today);

    let overdue = invoices
        .iter()
        .filter(unpaid)
        .filter(|inv| inv.payment_due < today)
        .map(|inv| inv.total)
        .sum();

    let outstanding = invoices.iter().filter(unpaid).map(|inv| inv.total).sum();

    let collectible = invoices
        .iter()
        .filter(unpaid)
        .filter(|inv| inv.payment_due >= today)
        .map(|inv| inv.total)
        .sum();

    let uncollectible = invoices
        .iter()
        .filter(|inv| inv.status != StoredStatus::Paid)
        .filter(|inv| inv.payment_due < cutoff)
        .map(|inv| inv.total)
        .sum();

    Summary {
        overdue,
        outstanding,
        collectible,
        uncollectible,
    }
}

/// Category counts for the filter badges, computed over the non-draft
/// subset the main tab shows.
pub fn category_counts(invoices: &[Invoice], today: NaiveDate) -> CategoryCounts {
    let non_draft: Vec<&Invoice> = invoices
        .iter()
        .filter(|inv| inv.status != StoredStatus::Draft)
        .collect();

    let mut counts = CategoryCounts {
        all: non_draft.len(),
        ..CategoryCounts::default()
    };
    for inv in non_draft {
        match display_status(inv, today) {
            DisplayStatus::AwaitingPayment | DisplayStatus::Overdue => counts.outstanding += 1,
            DisplayStatus::Paid => counts.paid += 1,
            DisplayStatus::Uncollectible => counts.uncollectible += 1,
            DisplayStatus::Draft => {}
        }
    }
    counts
}

/// Amount still owed: zero once the stored status is paid, otherwise the
/// invoice total.
pub fn amount_due(invoice: &Invoice) -> Decimal {
    if invoice.status == StoredStatus::Paid {
        Decimal::ZERO
    } else {
        invoice.total
    }
}
