//! API-facing order shapes
//!
//! The wire representation carries the derived total and the external
//! string id; items drop their internal ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::{Order, OrderItem, OrderStatus};

/// Order as returned over HTTP
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemResponse>,
    /// Recomputed from items on every read, never cached
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            name: item.name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let total_price = order.total_price();
        Self {
            id: order
                .id
                .map(|id| id.key().to_string())
                .unwrap_or_default(),
            status: order.status,
            created_at: order.created_at,
            items: order.items.into_iter().map(Into::into).collect(),
            total_price,
        }
    }
}
