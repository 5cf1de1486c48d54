//! Database Module
//!
//! Embedded SurrealDB storage: RocksDB-backed on disk for normal runs,
//! in-memory for tests.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "order_server";
const DATABASE: &str = "orders";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database at the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::select_ns(&db).await?;

        tracing::info!("Database connection established ({db_path})");
        Ok(Self { db })
    }

    /// Open an in-memory database (used by tests)
    pub async fn in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::select_ns(&db).await?;
        Ok(Self { db })
    }

    async fn select_ns(db: &Surreal<Db>) -> Result<(), AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Order;
    use crate::db::repository::OrderRepository;

    #[tokio::test]
    async fn open_on_disk_database_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();

        let repo = OrderRepository::new(db.db.clone());
        let created = repo.create(Order::new(vec![])).await.unwrap();
        let id = created.id.as_ref().unwrap().key().to_string();

        let fetched = repo.find_by_id(&id).await.unwrap();
        assert!(fetched.is_some());
    }
}
