//! Database Models

pub mod order;

pub use order::{Order, OrderId, OrderItem, OrderItemCreate, OrderStatus};
