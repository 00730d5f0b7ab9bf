//! Cart line items and the catalog descriptor used to create them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product as presented by the catalog.
///
/// This is the input to the cart's add path: everything a cart line needs
/// except a quantity. Title, image and price are display data carried along
/// for rendering; the cart never interprets or aggregates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier, the identity key for cart lookups.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Decimal,
}

/// One product line in the cart.
///
/// Quantity is at least 1 for every item at rest: lines are created with
/// quantity 1 and removed when a decrement brings them to 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique product identifier, the identity key for cart lookups.
    pub id: ProductId,
    /// Display name.
    pub title: String,
    /// Display image reference.
    pub image_url: String,
    /// Unit price.
    pub price: Decimal,
    /// Number of units of this product in the cart.
    pub quantity: u32,
}

impl From<Product> for CartItem {
    /// Create a cart line for a product entering the cart (quantity 1).
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product {
            id: ProductId::new("shirt-1"),
            title: "Shirt".to_owned(),
            image_url: "https://cdn.example.com/shirt.png".to_owned(),
            price: Decimal::new(1000, 2),
        }
    }

    #[test]
    fn test_cart_item_from_product_starts_at_quantity_one() {
        let item = CartItem::from(shirt());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, ProductId::new("shirt-1"));
        assert_eq!(item.title, "Shirt");
    }

    #[test]
    fn test_cart_item_serde_roundtrip() {
        let item = CartItem::from(shirt());
        let json = serde_json::to_string(&item).unwrap();
        let parsed: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }

    #[test]
    fn test_cart_item_json_field_names() {
        let item = CartItem::from(shirt());
        let value: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "shirt-1");
        assert_eq!(value["title"], "Shirt");
        assert!(value["image_url"].is_string());
        assert_eq!(value["quantity"], 1);
    }
}
