//! Integration tests for GoMarketplace.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p go-marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart operations against file-backed storage
//! - `persistence` - Mount/load behavior of the persisted blob
//!
//! Tests run against real files in per-test temporary directories; no
//! external services are required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use go_marketplace_core::{Product, ProductId};
use rust_decimal::Decimal;

/// Build a catalog descriptor for tests.
///
/// # Panics
///
/// Panics if `price` is not a valid decimal literal.
#[must_use]
pub fn product(id: &str, title: &str, price: &str) -> Product {
    let price = price
        .parse::<Decimal>()
        .unwrap_or_else(|e| panic!("invalid test price {price:?}: {e}"));

    Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: format!("https://cdn.example.com/{id}.png"),
        price,
    }
}
