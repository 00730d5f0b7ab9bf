//! Cart manipulation commands.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! gom-cli cart add --id shirt-1 --title "Shirt" --price 19.99
//!
//! # Bump or drop a line by product id
//! gom-cli cart increment shirt-1
//! gom-cli cart decrement shirt-1
//!
//! # Print the current cart
//! gom-cli cart show
//! ```

use go_marketplace_cart::{CartStore, KeyValueStorage};
use go_marketplace_core::{Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while running a cart command.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// The price argument was not a valid decimal number.
    #[error("Invalid price: {0}. Expected a decimal number like 19.99")]
    InvalidPrice(String),
}

/// Add a product to the cart and print the result.
///
/// # Errors
///
/// Returns `CartCommandError::InvalidPrice` if `price` does not parse as a
/// decimal number.
pub async fn add<S: KeyValueStorage>(
    cart: &CartStore<S>,
    id: &str,
    title: &str,
    image: &str,
    price: &str,
) -> Result<(), CartCommandError> {
    let price: Decimal = price
        .parse()
        .map_err(|_| CartCommandError::InvalidPrice(price.to_owned()))?;

    tracing::info!("Adding product {id} to cart");
    cart.add_to_cart(Product {
        id: ProductId::new(id),
        title: title.to_owned(),
        image_url: image.to_owned(),
        price,
    })
    .await;

    render(cart);
    Ok(())
}

/// Increment a cart line by product id and print the result.
pub async fn increment<S: KeyValueStorage>(cart: &CartStore<S>, id: &str) {
    tracing::info!("Incrementing product {id}");
    cart.increment(&ProductId::new(id)).await;
    render(cart);
}

/// Decrement a cart line by product id and print the result.
pub async fn decrement<S: KeyValueStorage>(cart: &CartStore<S>, id: &str) {
    tracing::info!("Decrementing product {id}");
    cart.decrement(&ProductId::new(id)).await;
    render(cart);
}

/// Print the current cart.
pub fn show<S: KeyValueStorage>(cart: &CartStore<S>) {
    render(cart);
}

#[allow(clippy::print_stdout)]
fn render<S: KeyValueStorage>(cart: &CartStore<S>) {
    let products = cart.products();
    if products.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in &products {
        println!(
            "{:>4} x {:<30} {:>10}  [{}]",
            item.quantity, item.title, item.price, item.id
        );
    }

    let count: u32 = products.iter().map(|item| item.quantity).sum();
    println!("{count} item(s) in {} line(s)", products.len());
}
