mod cart_entry;
mod order;
mod order_item;
mod product;
mod shipping_details;
mod user;

pub use cart_entry::CartEntry;
pub use order::OrderConfirmation;
pub use order_item::OrderItem;
pub use product::{Product, PLACEHOLDER_IMAGE};
pub use shipping_details::{ShippingDetails, DEFAULT_COUNTRY};
pub use user::User;
