//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use surrealdb::RecordId;
use uuid::Uuid;

pub type OrderId = RecordId;

/// Order lifecycle status
///
/// PENDING is the only initial state. DELIVERED is part of the status space
/// but no transition rule targets it; it is reachable only through the
/// unconditional status update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Canceled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Processing => "PROCESSING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
        };
        f.write_str(s)
    }
}

/// Order record matching the SurrealDB schema
///
/// Items are embedded in the aggregate: they are created and destroyed with
/// their owning order and are never reachable outside of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// New PENDING order with `created_at` fixed at construction time
    pub fn new(items: Vec<OrderItem>) -> Self {
        Self {
            id: None,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            items,
        }
    }

    /// Derived total: Σ(quantity × unit price). Never stored.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }
}

/// Single line entry within an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl OrderItem {
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Item spec for order creation
///
/// Quantity and price are accepted as-is; this service performs no input
/// validation on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<OrderItemCreate> for OrderItem {
    fn from(spec: OrderItemCreate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: spec.name,
            quantity: spec.quantity,
            price: spec.price,
        }
    }
}
