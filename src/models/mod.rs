//! Domain entities read from the content store.

pub mod menu_item;
pub mod money;
pub mod object;
pub mod order;
pub mod restaurant;

pub use menu_item::{MenuCategory, MenuItem};
pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
pub use restaurant::{Restaurant, RestaurantStatus};
