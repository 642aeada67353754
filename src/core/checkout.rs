//! Checkout wizard

use crate::config::StoreConfig;
use crate::core::cart::CartStore;
use crate::core::error::Error;
use crate::core::summary::OrderSummary;
use crate::core::types::{CheckoutStep, PaymentMethod, ShippingMethod};
use crate::models::{OrderConfirmation, OrderItem, ShippingDetails, User};
use crate::Result;

use chrono::Utc;
use uuid::Uuid;

/// Drives a shopper from account choice to a placed order
#[derive(Debug, Clone)]
pub struct CheckoutFlow {
    step: CheckoutStep,
    shipping: ShippingDetails,
    shipping_method: ShippingMethod,
    payment_method: PaymentMethod,
    user_id: Option<String>,
}

impl CheckoutFlow {
    /// Starts checkout. Signed-in shoppers skip the account step and get
    /// their email prefilled.
    pub fn start(user: Option<&User>) -> Self {
        let step = if user.is_some() {
            CheckoutStep::Shipping
        } else {
            CheckoutStep::Account
        };

        let shipping = ShippingDetails {
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
            ..ShippingDetails::default()
        };

        Self {
            step,
            shipping,
            shipping_method: ShippingMethod::default(),
            payment_method: PaymentMethod::default(),
            user_id: user.map(|u| u.id.clone()),
        }
    }

    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Shipping details entered so far
    pub fn shipping(&self) -> &ShippingDetails {
        &self.shipping
    }

    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Leaves the account step, either as a guest or after signing in
    pub fn continue_to_shipping(&mut self, user: Option<&User>) -> Result<()> {
        if self.step != CheckoutStep::Account {
            return Err(self.invalid_move(CheckoutStep::Shipping));
        }

        if let Some(user) = user {
            self.user_id = Some(user.id.clone());
            if self.shipping.email.is_empty() {
                self.shipping.email = user.email.clone();
            }
        }

        self.transition(CheckoutStep::Shipping)
    }

    /// Validates and stores the shipping form, moving on to payment
    pub fn submit_shipping(&mut self, details: ShippingDetails) -> Result<()> {
        if self.step != CheckoutStep::Shipping {
            return Err(self.invalid_move(CheckoutStep::Payment));
        }

        let missing = details.missing_fields();
        if !missing.is_empty() {
            return Err(Error::InvalidData(format!(
                "Missing shipping fields: {}",
                missing.join(", ")
            )));
        }

        self.shipping = details;
        self.transition(CheckoutStep::Payment)
    }

    /// Returns from payment to the shipping form, keeping what was entered
    pub fn back_to_shipping(&mut self) -> Result<()> {
        self.transition(CheckoutStep::Shipping)
    }

    pub fn select_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Summary for the cart under the currently selected shipping method
    pub fn summary(&self, cart: &CartStore, config: &StoreConfig) -> OrderSummary {
        OrderSummary::from_cart(cart, config, self.shipping_method)
    }

    /// Places the order: snapshots the cart into a confirmation, then empties
    /// and closes the cart. No payment is taken.
    pub fn place_order(
        &mut self,
        cart: &mut CartStore,
        config: &StoreConfig,
    ) -> Result<OrderConfirmation> {
        if self.step != CheckoutStep::Payment {
            return Err(self.invalid_move(CheckoutStep::Complete));
        }

        if cart.is_empty() {
            return Err(Error::InvalidState("Cannot place an order for an empty cart".into()));
        }

        let confirmation = OrderConfirmation {
            order_id: Uuid::new_v4().to_string(),
            created_timestamp: Utc::now().timestamp() as u64,
            items: cart.entries().iter().map(OrderItem::from).collect(),
            summary: self.summary(cart, config),
            shipping: self.shipping.clone(),
            shipping_method: self.shipping_method,
            payment_method: self.payment_method,
            user_id: self.user_id.clone(),
        };

        cart.clear_cart();
        cart.set_cart_open(false);
        self.transition(CheckoutStep::Complete)?;

        log::info!(
            "Placed order {} for {} items, total {}",
            confirmation.order_id,
            confirmation.summary.total_items,
            confirmation.summary.total
        );

        Ok(confirmation)
    }

    fn transition(&mut self, to: CheckoutStep) -> Result<()> {
        if !self.step.is_valid_transition(&to) {
            return Err(self.invalid_move(to));
        }

        log::debug!("Checkout: {} -> {}", self.step.as_str(), to.as_str());
        self.step = to;
        Ok(())
    }

    fn invalid_move(&self, to: CheckoutStep) -> Error {
        Error::InvalidState(format!(
            "Invalid checkout transition: from {} to {}",
            self.step.as_str(),
            to.as_str()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, DEFAULT_COUNTRY};
    use rust_decimal_macros::dec;

    fn filled_details() -> ShippingDetails {
        ShippingDetails {
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            address: "12 Marina Road".into(),
            apartment: Some("Flat 3".into()),
            city: "Lagos".into(),
            state: "Lagos".into(),
            zip_code: "101001".into(),
            country: DEFAULT_COUNTRY.into(),
            phone: "+234 800 000 0000".into(),
        }
    }

    fn stocked_cart() -> CartStore {
        let mut cart = CartStore::new();
        cart.add_item(Product::new("prod-a", "Product A", dec!(10)), 2);
        cart.add_item(Product::new("prod-b", "Product B", dec!(5)), 1);
        cart.set_cart_open(true);
        cart
    }

    #[test]
    fn test_guest_checkout_flow() {
        let config = StoreConfig::default();
        let mut cart = stocked_cart();
        let mut flow = CheckoutFlow::start(None);
        assert_eq!(flow.step(), CheckoutStep::Account);

        flow.continue_to_shipping(None).unwrap();
        flow.submit_shipping(filled_details()).unwrap();
        flow.select_payment_method(PaymentMethod::PayOnDelivery);
        assert_eq!(flow.step(), CheckoutStep::Payment);

        let confirmation = flow.place_order(&mut cart, &config).unwrap();

        assert_eq!(flow.step(), CheckoutStep::Complete);
        assert_eq!(confirmation.items.len(), 2);
        assert_eq!(confirmation.total_items(), 3);
        assert_eq!(confirmation.summary.subtotal, dec!(25));
        assert_eq!(confirmation.payment_method, PaymentMethod::PayOnDelivery);
        assert!(confirmation.user_id.is_none());
        assert!(Uuid::parse_str(&confirmation.order_id).is_ok());

        assert!(cart.is_empty());
        assert!(!cart.is_open());
    }

    #[test]
    fn test_signed_in_user_skips_account_step() {
        let user = User::new("user-123", "ada@example.com");
        let flow = CheckoutFlow::start(Some(&user));

        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(flow.shipping().email, "ada@example.com");
    }

    #[test]
    fn test_incomplete_shipping_rejected() {
        let mut flow = CheckoutFlow::start(None);
        flow.continue_to_shipping(None).unwrap();

        let details = ShippingDetails {
            city: String::new(),
            ..filled_details()
        };

        let result = flow.submit_shipping(details);
        assert!(matches!(result, Err(Error::InvalidData(msg)) if msg.contains("city")));
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_cannot_skip_steps() {
        let config = StoreConfig::default();
        let mut cart = stocked_cart();
        let mut flow = CheckoutFlow::start(None);

        assert!(flow.submit_shipping(filled_details()).is_err());
        assert!(flow.place_order(&mut cart, &config).is_err());
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_empty_cart_cannot_be_ordered() {
        let config = StoreConfig::default();
        let mut cart = CartStore::new();
        let user = User::new("user-123", "ada@example.com");
        let mut flow = CheckoutFlow::start(Some(&user));
        flow.submit_shipping(filled_details()).unwrap();

        let result = flow.place_order(&mut cart, &config);
        assert!(matches!(result, Err(Error::InvalidState(_))));
        assert_eq!(flow.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_back_to_shipping_and_express_summary() {
        let config = StoreConfig::default();
        let cart = stocked_cart();
        let user = User::new("user-123", "ada@example.com");
        let mut flow = CheckoutFlow::start(Some(&user));
        flow.submit_shipping(filled_details()).unwrap();

        flow.back_to_shipping().unwrap();
        assert_eq!(flow.step(), CheckoutStep::Shipping);
        assert_eq!(flow.shipping().first_name, "Ada");

        flow.select_shipping_method(ShippingMethod::Express);
        assert_eq!(flow.summary(&cart, &config).shipping, dec!(150));
    }
}
