//! Server state

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::db::DbService;
use crate::orders::{OrderService, OrderSweeper};
use crate::utils::AppError;

/// Shared server state — cheap to clone, handed to every request handler
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Order lifecycle engine
    pub orders: OrderService,
}

impl ServerState {
    /// Initialize state against the on-disk database from `config.data_dir`
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::new(&config.data_dir).await?;
        Ok(Self::with_db(config.clone(), db_service.db))
    }

    /// Initialize state against an in-memory database (tests)
    pub async fn in_memory(config: Config) -> Result<Self, AppError> {
        let db_service = DbService::in_memory().await?;
        Ok(Self::with_db(config, db_service.db))
    }

    /// Build state from an existing database handle
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let orders = OrderService::new(db.clone());
        Self { config, db, orders }
    }

    /// Start background tasks; must run before serving requests
    ///
    /// Tasks started:
    /// - order sweeper (periodic PENDING → PROCESSING advance)
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        let sweeper = OrderSweeper::new(
            self.orders.clone(),
            Duration::from_secs(self.config.sweep_interval_secs),
            tasks.shutdown_token(),
        );
        tasks.spawn("order_sweeper", TaskKind::Periodic, sweeper.run());

        tasks
    }
}
