use crate::models::CartEntry;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one line of a placed order
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Identifier of the ordered product
    pub product_id: String,
    /// Product name at the time of ordering
    pub name: String,
    /// Unit price at the time of ordering
    pub unit_price: Decimal,
    /// Quantity ordered
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new OrderItem
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl From<&CartEntry> for OrderItem {
    fn from(entry: &CartEntry) -> Self {
        Self::new(
            entry.product.id.clone(),
            entry.product.name.clone(),
            entry.product.price,
            entry.quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_item_from_entry() {
        let entry = CartEntry::new(Product::new("prod-7", "Baby Monitor", dec!(79.99)), 2);
        let item = OrderItem::from(&entry);

        assert_eq!(item.product_id, "prod-7");
        assert_eq!(item.name, "Baby Monitor");
        assert_eq!(item.line_total(), dec!(159.98));
    }
}
