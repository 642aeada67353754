//! Shopping cart store
//!
//! The [`CartStore`] is the single source of truth for what the shopper has
//! picked and whether the cart panel is showing. It is an owned value: build
//! one at startup and hand references to whatever renders or mutates it.
//!
//! Entries are unique per product id and always hold a quantity of at least
//! one. Totals are recomputed from the entries on every read. After every
//! mutation the entries are written to storage (best effort) and subscribers
//! are notified.

use crate::core::error::Error;
use crate::models::{CartEntry, Product};
use crate::storage::KeyValueStorage;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage key used when none is configured
pub const DEFAULT_CART_KEY: &str = "cart";

/// Handle returned by [`CartStore::subscribe`]
pub type SubscriptionId = u64;

/// Change notification delivered to subscribers after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A product was added or merged into an existing entry
    ItemAdded {
        /// The product added
        product_id: String,
        /// Quantity of the entry after the add
        quantity: u32,
    },
    /// An entry was removed
    ItemRemoved {
        /// The product removed
        product_id: String,
    },
    /// An entry's quantity was set
    QuantityUpdated {
        /// The product updated
        product_id: String,
        /// The new quantity
        quantity: u32,
    },
    /// All entries were removed
    Cleared,
    /// The cart panel was opened or closed
    VisibilityChanged {
        /// Whether the panel is now open
        is_open: bool,
    },
}

type Listener = Box<dyn FnMut(&CartEvent)>;

/// Wire form of one persisted entry. The product snapshot is embedded so a
/// rehydrated cart renders without a catalog lookup.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PersistedEntry {
    product_id: String,
    quantity: u32,
    product: Product,
}

/// Shopping cart state container
pub struct CartStore {
    entries: Vec<CartEntry>,
    is_open: bool,
    storage: Option<Arc<dyn KeyValueStorage>>,
    storage_key: String,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl CartStore {
    /// Creates an empty cart that is not persisted anywhere
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            is_open: false,
            storage: None,
            storage_key: DEFAULT_CART_KEY.to_string(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates a cart persisted under `storage_key`, rehydrating whatever was
    /// saved there before. Absent or unreadable data yields an empty cart.
    pub fn with_storage(
        storage: Arc<dyn KeyValueStorage>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let entries = Self::rehydrate(storage.as_ref(), &storage_key);

        Self {
            entries,
            storage: Some(storage),
            storage_key,
            ..Self::new()
        }
    }

    /// Adds `quantity` of `product`, merging into an existing entry for the
    /// same product id. Quantities below 1 are treated as 1.
    pub fn add_item(&mut self, product: Product, quantity: i64) {
        let quantity = clamp_quantity(quantity);
        let product_id = product.id.clone();

        let new_quantity = match self.position(&product_id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry.quantity
            }
            None => {
                self.entries.push(CartEntry::new(product, quantity));
                quantity
            }
        };

        log::debug!("Cart: {} now x{}", product_id, new_quantity);

        self.persist();
        self.notify(CartEvent::ItemAdded {
            product_id,
            quantity: new_quantity,
        });
    }

    /// Removes the entry for `product_id`. Absent ids are ignored.
    pub fn remove_item(&mut self, product_id: &str) {
        let Some(index) = self.position(product_id) else {
            return;
        };

        self.entries.remove(index);
        log::debug!("Cart: removed {}", product_id);

        self.persist();
        self.notify(CartEvent::ItemRemoved {
            product_id: product_id.to_string(),
        });
    }

    /// Sets the quantity for `product_id` to exactly `quantity`. A quantity of
    /// zero or less removes the entry. Absent ids are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        let Some(index) = self.position(product_id) else {
            return;
        };

        let quantity = clamp_quantity(quantity);
        if self.entries[index].quantity == quantity {
            return;
        }

        self.entries[index].quantity = quantity;
        log::debug!("Cart: {} set to x{}", product_id, quantity);

        self.persist();
        self.notify(CartEvent::QuantityUpdated {
            product_id: product_id.to_string(),
            quantity,
        });
    }

    /// Removes every entry. The panel stays open or closed as it was.
    pub fn clear_cart(&mut self) {
        self.entries.clear();
        log::debug!("Cart: cleared");

        self.persist();
        self.notify(CartEvent::Cleared);
    }

    /// Flips the panel visibility
    pub fn toggle_cart(&mut self) {
        self.set_cart_open(!self.is_open);
    }

    /// Opens or closes the panel. Visibility is never persisted.
    pub fn set_cart_open(&mut self, is_open: bool) {
        if self.is_open == is_open {
            return;
        }

        self.is_open = is_open;
        self.notify(CartEvent::VisibilityChanged { is_open });
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Entries in the order they were first added
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Entry for `product_id`, if present
    pub fn get(&self, product_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.product.id == product_id)
    }

    /// Quantity held for `product_id`, zero when absent
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.get(product_id).map(|entry| entry.quantity).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of quantities across all entries
    pub fn total_items(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sum of unit price times quantity across all entries, capped at
    /// `Decimal::MAX`
    pub fn total_price(&self) -> Decimal {
        self.entries
            .iter()
            .map(CartEntry::line_total)
            .fold(Decimal::ZERO, |total, line| {
                total.checked_add(line).unwrap_or(Decimal::MAX)
            })
    }

    /// Registers `listener` to be called after every change. Listeners run in
    /// registration order.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent) + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops a listener. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.product.id == product_id)
    }

    fn notify(&mut self, event: CartEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }

    /// Writes the entries to storage. Failures are logged and dropped: the
    /// in-memory state stays authoritative for this session.
    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        let persisted: Vec<PersistedEntry> = self
            .entries
            .iter()
            .map(|entry| PersistedEntry {
                product_id: entry.product.id.clone(),
                quantity: entry.quantity,
                product: entry.product.clone(),
            })
            .collect();

        let result = serde_json::to_string(&persisted)
            .map_err(Error::from)
            .and_then(|json| storage.set(&self.storage_key, &json));

        if let Err(e) = result {
            log::warn!("Failed to persist cart under '{}': {}", self.storage_key, e);
        }
    }

    fn rehydrate(storage: &dyn KeyValueStorage, storage_key: &str) -> Vec<CartEntry> {
        let json = match storage.get(storage_key) {
            Ok(Some(json)) => json,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read saved cart '{}': {}", storage_key, e);
                return Vec::new();
            }
        };

        let persisted: Vec<PersistedEntry> = match serde_json::from_str(&json) {
            Ok(persisted) => persisted,
            Err(e) => {
                log::warn!("Discarding corrupted cart '{}': {}", storage_key, e);
                return Vec::new();
            }
        };

        let mut entries: Vec<CartEntry> = Vec::with_capacity(persisted.len());
        for saved in persisted {
            if saved.quantity == 0
                || saved.product_id != saved.product.id
                || saved.product.price.is_sign_negative()
            {
                log::warn!("Skipping invalid saved cart entry for {}", saved.product_id);
                continue;
            }

            match entries.iter_mut().find(|e| e.product.id == saved.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(saved.quantity)
                }
                None => entries.push(CartEntry::new(saved.product, saved.quantity)),
            }
        }

        log::debug!("Rehydrated cart with {} entries", entries.len());
        entries
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.entries)
            .field("is_open", &self.is_open)
            .field("storage_key", &self.storage_key)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}
