//! Newtype ID for type-safe product references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a product as issued by the catalog.
///
/// The value is opaque to the cart: it is never parsed or validated, only
/// compared. Wrapping it in a newtype prevents accidentally mixing product
/// ids with other string-typed values.
///
/// ## Examples
///
/// ```
/// use go_marketplace_core::ProductId;
///
/// let id = ProductId::new("prod-42");
/// assert_eq!(id.as_str(), "prod-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = ProductId::new("prod-1");
        assert_eq!(id.as_str(), "prod-1");
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("prod-1");
        assert_eq!(format!("{id}"), "prod-1");
    }

    #[test]
    fn test_from_str_and_string() {
        let a = ProductId::from("prod-1");
        let b = ProductId::from("prod-1".to_owned());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("prod-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"prod-1\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_into_inner() {
        let id = ProductId::new("prod-1");
        assert_eq!(id.into_inner(), "prod-1");
    }
}
