use crate::models::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One product held by the cart together with how many of it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartEntry {
    /// The product snapshot taken when it was added
    pub product: Product,
    /// Quantity, always at least 1 while the entry exists
    pub quantity: u32,
}

impl CartEntry {
    /// Creates a new CartEntry, raising a zero quantity to 1
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
        }
    }

    /// Identifier of the product in this entry
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price multiplied by quantity, capped at `Decimal::MAX`
    pub fn line_total(&self) -> Decimal {
        self.product
            .price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_total() {
        let entry = CartEntry::new(Product::new("prod-2", "Baby Bath Set", dec!(34.99)), 3);
        assert_eq!(entry.product_id(), "prod-2");
        assert_eq!(entry.line_total(), dec!(104.97));
    }

    #[test]
    fn test_line_total_saturates() {
        let entry = CartEntry::new(Product::new("huge", "Huge", Decimal::MAX), u32::MAX);
        assert_eq!(entry.line_total(), Decimal::MAX);
    }

    #[test]
    fn test_zero_quantity_raised() {
        let entry = CartEntry::new(Product::new("prod-2", "Baby Bath Set", dec!(34.99)), 0);
        assert_eq!(entry.quantity, 1);
    }
}
