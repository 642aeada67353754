use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Image shown when a product has none of its own
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Represents a purchasable product from the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: String,
    /// Display name of the product
    pub name: String,
    /// Unit price, never negative
    pub price: Decimal,
    /// Image reference (URL or asset path)
    pub image: String,
    /// Category label (e.g. "clothing", "gear")
    pub category: String,
    /// Longer description for the detail page
    pub description: String,
}

impl Product {
    /// Creates a new Product with required fields
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.max(Decimal::ZERO),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: String::new(),
            description: String::new(),
        }
    }

    /// Sets the image reference
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_builder() {
        let product = Product::new("prod-1", "Organic Cotton Baby Romper", dec!(24.99))
            .with_category("clothing")
            .with_description("Soft and breathable");

        assert_eq!(product.id, "prod-1");
        assert_eq!(product.price, dec!(24.99));
        assert_eq!(product.image, PLACEHOLDER_IMAGE);
        assert_eq!(product.category, "clothing");
    }

    #[test]
    fn test_negative_price_clamped() {
        let product = Product::new("prod-x", "Broken", dec!(-3.50));
        assert_eq!(product.price, Decimal::ZERO);
    }
}
