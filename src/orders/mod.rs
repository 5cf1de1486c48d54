//! Order lifecycle — engine, sweeper and wire types

pub mod service;
pub mod sweeper;
pub mod types;

pub use service::OrderService;
pub use sweeper::OrderSweeper;
pub use types::{OrderItemResponse, OrderResponse};

#[cfg(test)]
mod tests;
