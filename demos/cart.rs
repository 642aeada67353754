//! Example of a shopping session against in-memory storage

use libbabyshop::{
    core::{catalog::Catalog, types::ShippingMethod},
    storage::{KeyValueStorage, MemoryStorage},
    CartEvent, StoreConfig, Storefront,
};
use std::sync::Arc;

fn main() -> libbabyshop::Result<()> {
    // Initialize logging
    env_logger::init();

    let storage = MemoryStorage::new();
    let mut shop = Storefront::with_storage(
        StoreConfig::default(),
        Arc::new(storage.clone()),
        Catalog::default_catalog(),
    );

    // Re-render the cart badge whenever the cart changes
    shop.cart_mut().subscribe(|event| match event {
        CartEvent::VisibilityChanged { is_open } => {
            println!("[cart panel {}]", if *is_open { "open" } else { "closed" })
        }
        other => println!("[cart changed: {:?}]", other),
    });

    shop.add_to_cart("prod-1", 1)?;
    shop.add_to_cart("prod-1", 2)?;
    shop.add_to_cart("prod-7", 1)?;
    shop.cart_mut().update_quantity("prod-1", 1);

    let summary = shop.summary(ShippingMethod::Standard);
    println!(
        "{} items, subtotal {}, shipping {}, tax {}, total {}",
        summary.total_items, summary.subtotal, summary.shipping, summary.tax, summary.total
    );

    println!("Persisted cart: {}", storage.get("cart")?.unwrap_or_default());

    // A fresh session sees the same cart, with the panel closed
    let reloaded = Storefront::with_storage(
        StoreConfig::default(),
        Arc::new(storage),
        Catalog::default_catalog(),
    );
    println!(
        "After reload: {} items, open = {}",
        reloaded.cart().total_items(),
        reloaded.cart().is_open()
    );

    Ok(())
}
