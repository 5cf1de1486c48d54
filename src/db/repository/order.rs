//! Order Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Order, OrderStatus};

const TABLE: &str = "orders";

#[derive(Serialize)]
struct StatusPatch {
    status: OrderStatus,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders in datastore natural order
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self.base.db().select(TABLE).await?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let order: Option<Order> = self.base.db().select((TABLE, id)).await?;
        Ok(order)
    }

    /// Find all orders with the given status
    pub async fn find_by_status(&self, status: OrderStatus) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM orders WHERE status = $status")
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Persist a new order; the datastore assigns the record id
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Overwrite the status of an existing order
    ///
    /// No transition checking happens here; callers that need a guard
    /// (cancel) inspect the current status first.
    pub async fn set_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let updated: Option<Order> = self
            .base
            .db()
            .update((TABLE, id))
            .merge(StatusPatch { status })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))
    }
}
