//! Shared fixtures for invoice-tracker integration tests.
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use invoice_tracker::models::{
    Address, Invoice, InvoiceForm, LineItem, LineItemForm, StoredStatus,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn address(street: &str) -> Address {
    Address {
        street: street.to_string(),
        city: "London".to_string(),
        post_code: "E1 3EZ".to_string(),
        country: "United Kingdom".to_string(),
    }
}

pub fn item(name: &str, quantity: u32, price: Decimal) -> LineItemForm {
    LineItemForm {
        name: name.to_string(),
        quantity,
        price,
    }
}

/// A filled-in form for `create`/`update` calls.
pub fn form(
    client: &str,
    status: StoredStatus,
    created_at: NaiveDate,
    payment_terms: i64,
    items: Vec<LineItemForm>,
) -> InvoiceForm {
    InvoiceForm {
        created_at,
        description: format!("Work for {}", client),
        payment_terms,
        client_name: client.to_string(),
        client_email: format!("{}@example.com", client.to_lowercase()),
        status,
        sender_address: address("19 Union Terrace"),
        client_address: address("123 Client Street"),
        items,
    }
}

/// A complete invoice record for engine tests, where only the stored
/// status, due date, and total matter.
pub fn invoice(
    id: &str,
    client: &str,
    status: StoredStatus,
    payment_due: NaiveDate,
    total: i64,
) -> Invoice {
    let total = Decimal::from(total);
    Invoice {
        id: id.to_string(),
        created_at: payment_due - Duration::days(30),
        payment_due,
        description: format!("Invoice for {}", client),
        payment_terms: 30,
        client_name: client.to_string(),
        client_email: format!("{}@example.com", client.to_lowercase()),
        status,
        sender_address: address("19 Union Terrace"),
        client_address: address("123 Client Street"),
        items: vec![LineItem {
            id: format!("{}X", id),
            name: "Service Fee".to_string(),
            quantity: 1,
            price: total,
            total,
        }],
        total,
    }
}
