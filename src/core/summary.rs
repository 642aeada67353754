//! Order summary shown beside the cart and at checkout

use crate::config::StoreConfig;
use crate::core::cart::CartStore;
use crate::core::types::ShippingMethod;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Subtotal, shipping, tax and grand total for the current cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Number of units in the cart
    pub total_items: u64,
    /// Sum of line totals
    pub subtotal: Decimal,
    /// Shipping fee, zero when free
    pub shipping: Decimal,
    /// Tax on the subtotal, rounded to cents
    pub tax: Decimal,
    /// subtotal + shipping + tax
    pub total: Decimal,
    /// How much more to spend before standard shipping is free
    pub amount_to_free_shipping: Option<Decimal>,
}

impl OrderSummary {
    /// Computes the summary for `cart` under `config`'s pricing rules
    pub fn from_cart(cart: &CartStore, config: &StoreConfig, method: ShippingMethod) -> Self {
        Self::compute(cart.total_items(), cart.total_price(), config, method)
    }

    /// Computes the summary from already-derived totals
    pub fn compute(
        total_items: u64,
        subtotal: Decimal,
        config: &StoreConfig,
        method: ShippingMethod,
    ) -> Self {
        let qualifies = subtotal >= config.free_shipping_threshold;

        let shipping = match method {
            ShippingMethod::Standard if qualifies => Decimal::ZERO,
            ShippingMethod::Standard => config.standard_shipping_fee,
            ShippingMethod::Express => config.express_shipping_fee,
        };

        let tax = (subtotal * config.tax_rate)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let amount_to_free_shipping = if qualifies {
            None
        } else {
            Some(config.free_shipping_threshold - subtotal)
        };

        Self {
            total_items,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
            amount_to_free_shipping,
        }
    }

    /// Whether standard shipping costs nothing at this subtotal
    pub fn has_free_shipping(&self) -> bool {
        self.amount_to_free_shipping.is_none()
    }
}
