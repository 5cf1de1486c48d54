//! Order Lifecycle Engine
//!
//! All order mutations go through this service: creation, the unconditional
//! status overwrite, the guarded cancel, and the bulk PENDING → PROCESSING
//! advance used by the sweeper. Lookups signal absence with `Option`/`bool`;
//! only datastore faults surface as errors.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Order, OrderItemCreate, OrderStatus};
use crate::db::repository::{OrderRepository, RepoError};
use crate::orders::types::OrderResponse;
use crate::utils::AppResult;

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
}

impl OrderService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db),
        }
    }

    /// Create a PENDING order from a possibly-empty list of item specs
    ///
    /// Item quantity and price are stored as-is, without validation.
    pub async fn create_order(&self, items: Vec<OrderItemCreate>) -> AppResult<OrderResponse> {
        let order = Order::new(items.into_iter().map(Into::into).collect());
        let created = self.orders.create(order).await?;
        Ok(created.into())
    }

    /// Fetch a single order; `None` if the id does not exist
    pub async fn get_order(&self, id: &str) -> AppResult<Option<OrderResponse>> {
        let order = self.orders.find_by_id(id).await?;
        Ok(order.map(Into::into))
    }

    /// List all orders, optionally filtered by status
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> AppResult<Vec<OrderResponse>> {
        let orders = match status {
            Some(s) => self.orders.find_by_status(s).await?,
            None => self.orders.find_all().await?,
        };
        Ok(orders.into_iter().map(Into::into).collect())
    }

    /// Unconditionally overwrite an order's status
    ///
    /// Returns false when the order does not exist. Any transition is
    /// allowed, including backwards and self-transitions.
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> AppResult<bool> {
        match self.orders.set_status(id, status).await {
            Ok(_) => Ok(true),
            Err(RepoError::NotFound(_)) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Cancel an order iff it is currently PENDING
    ///
    /// Not-found and wrong-state both yield false; callers cannot tell them
    /// apart. No mutation happens in the false case.
    pub async fn cancel_order(&self, id: &str) -> AppResult<bool> {
        match self.orders.find_by_id(id).await? {
            Some(order) if order.status == OrderStatus::Pending => {
                self.orders.set_status(id, OrderStatus::Canceled).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Bulk advance: every currently-PENDING order becomes PROCESSING
    ///
    /// Stateless across invocations; correctness relies only on the
    /// persisted status at query time. Returns the number of orders moved.
    pub async fn advance_pending_orders(&self) -> AppResult<usize> {
        let pending = self.orders.find_by_status(OrderStatus::Pending).await?;
        let mut advanced = 0;
        for order in pending {
            let Some(id) = order.id.as_ref() else {
                continue;
            };
            let key = id.key().to_string();
            self.orders.set_status(&key, OrderStatus::Processing).await?;
            tracing::info!(order_id = %key, "Auto-advanced order to PROCESSING");
            advanced += 1;
        }
        Ok(advanced)
    }
}
