//! Application-level entry point wiring the cart, catalog and account together

use crate::config::StoreConfig;
use crate::core::auth::{AuthProvider, MockAuthProvider};
use crate::core::cart::CartStore;
use crate::core::catalog::Catalog;
use crate::core::checkout::CheckoutFlow;
use crate::core::summary::OrderSummary;
use crate::core::types::ShippingMethod;
use crate::models::OrderConfirmation;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::Result;

use std::sync::Arc;
use std::time::Duration;

/// Owns the storefront's shared state for one session. Build it once at
/// startup and pass it (or its parts) to whatever renders the shop.
pub struct Storefront {
    /// Pricing and storage settings
    config: StoreConfig,
    /// Products on sale
    catalog: Catalog,
    /// The shopper's cart
    cart: CartStore,
    /// Account sign-in
    auth: Box<dyn AuthProvider>,
}

impl Storefront {
    /// Opens the storefront persisted under the configured data directory
    pub fn open(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let dir = config.expanded_data_dir()?;
        log::info!("Opening storefront state in {}", dir.display());

        Ok(Self::with_storage(
            config,
            Arc::new(FileStorage::new(dir)),
            Catalog::default_catalog(),
        ))
    }

    /// Builds a storefront over `storage` using the mock auth provider
    pub fn with_storage(
        config: StoreConfig,
        storage: Arc<dyn KeyValueStorage>,
        catalog: Catalog,
    ) -> Self {
        let auth = MockAuthProvider::new(Arc::clone(&storage), config.user_storage_key.clone())
            .with_latency(Duration::from_millis(config.auth_latency_ms));

        Self::with_auth(config, storage, catalog, Box::new(auth))
    }

    /// Builds a storefront with a caller-supplied auth provider
    pub fn with_auth(
        config: StoreConfig,
        storage: Arc<dyn KeyValueStorage>,
        catalog: Catalog,
        auth: Box<dyn AuthProvider>,
    ) -> Self {
        let cart = CartStore::with_storage(storage, config.cart_storage_key.clone());

        Self {
            config,
            catalog,
            cart,
            auth,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    pub fn auth(&self) -> &dyn AuthProvider {
        self.auth.as_ref()
    }

    pub fn auth_mut(&mut self) -> &mut dyn AuthProvider {
        self.auth.as_mut()
    }

    /// Adds a catalog product to the cart by id and opens the cart panel
    pub fn add_to_cart(&mut self, product_id: &str, quantity: i64) -> Result<()> {
        let product = self.catalog.require(product_id)?.clone();
        self.cart.add_item(product, quantity);
        self.cart.set_cart_open(true);
        Ok(())
    }

    /// Summary of the current cart
    pub fn summary(&self, method: ShippingMethod) -> OrderSummary {
        OrderSummary::from_cart(&self.cart, &self.config, method)
    }

    /// Closes the cart panel and starts a checkout for the current user
    pub fn begin_checkout(&mut self) -> CheckoutFlow {
        self.cart.set_cart_open(false);
        CheckoutFlow::start(self.auth.current_user())
    }

    /// Places the order prepared by `flow`
    pub fn place_order(&mut self, flow: &mut CheckoutFlow) -> Result<OrderConfirmation> {
        flow.place_order(&mut self.cart, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::types::CheckoutStep;
    use crate::models::ShippingDetails;
    use crate::storage::MemoryStorage;
    use rust_decimal_macros::dec;

    fn storefront(storage: &MemoryStorage) -> Storefront {
        Storefront::with_storage(
            StoreConfig::default(),
            Arc::new(storage.clone()),
            Catalog::default_catalog(),
        )
    }

    #[test]
    fn test_add_to_cart_by_id() {
        let storage = MemoryStorage::new();
        let mut shop = storefront(&storage);

        shop.add_to_cart("prod-1", 2).unwrap();
        shop.add_to_cart("prod-1", 1).unwrap();

        assert!(shop.cart().is_open());
        assert_eq!(shop.cart().quantity_of("prod-1"), 3);
        assert_eq!(shop.cart().total_price(), dec!(74.97));

        let result = shop.add_to_cart("prod-404", 1);
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert_eq!(shop.cart().entries().len(), 1);
    }

    #[test]
    fn test_session_survives_reload() {
        let storage = MemoryStorage::new();
        {
            let mut shop = storefront(&storage);
            shop.add_to_cart("prod-3", 1).unwrap();
        }

        let shop = storefront(&storage);
        assert_eq!(shop.cart().quantity_of("prod-3"), 1);
        assert!(!shop.cart().is_open());
        assert_eq!(shop.summary(ShippingMethod::Standard).subtotal, dec!(149.99));
    }

    #[tokio::test]
    async fn test_signed_in_checkout() {
        let storage = MemoryStorage::new();
        let mut shop = storefront(&storage);
        shop.auth_mut()
            .login("ada@example.com", "pw")
            .await
            .unwrap();

        shop.add_to_cart("prod-7", 1).unwrap();
        let mut flow = shop.begin_checkout();
        assert!(!shop.cart().is_open());
        assert_eq!(flow.step(), CheckoutStep::Shipping);

        let details = ShippingDetails {
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            address: "12 Marina Road".into(),
            city: "Lagos".into(),
            state: "Lagos".into(),
            zip_code: "101001".into(),
            phone: "0800".into(),
            ..flow.shipping().clone()
        };
        flow.submit_shipping(details).unwrap();

        let confirmation = shop.place_order(&mut flow).unwrap();
        assert_eq!(confirmation.user_id.as_deref(), Some("user-123"));
        assert_eq!(confirmation.shipping.email, "ada@example.com");
        assert!(shop.cart().is_empty());
        assert!(storefront(&storage).cart().is_empty());
    }
}
