use crate::core::summary::OrderSummary;
use crate::core::types::{PaymentMethod, ShippingMethod};
use crate::models::{OrderItem, ShippingDetails};
use serde::{Deserialize, Serialize};

/// Receipt produced when checkout places an order
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderConfirmation {
    /// Unique identifier for the order
    pub order_id: String,
    /// Unix timestamp when the order was placed
    pub created_timestamp: u64,
    /// Lines copied from the cart
    pub items: Vec<OrderItem>,
    /// Totals at the time of ordering
    pub summary: OrderSummary,
    /// Where the order ships to
    pub shipping: ShippingDetails,
    /// Shipping speed chosen
    pub shipping_method: ShippingMethod,
    /// Payment method chosen (nothing is charged)
    pub payment_method: PaymentMethod,
    /// Identifier of the signed-in account, if any
    pub user_id: Option<String>,
}

impl OrderConfirmation {
    /// Total number of units across all lines
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
