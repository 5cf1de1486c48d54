//! Order Server — order-management REST service
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/     # configuration, state, server, background tasks
//! ├── api/      # HTTP routes and handlers
//! ├── db/       # embedded SurrealDB storage and repositories
//! ├── orders/   # order lifecycle engine and scheduled sweeper
//! └── utils/    # errors, logging
//! ```
//!
//! Orders are created PENDING, carry their line items as an embedded
//! aggregate, and change status only through explicit transitions: the
//! unconditional update, the guarded cancel, or the periodic sweep that
//! advances PENDING orders to PROCESSING.

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

pub use self::core::{Config, Server, ServerState, build_app};
pub use orders::{OrderService, OrderSweeper};
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::{AppError, AppResult};

/// Load `.env` and initialize logging from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ____          __
  / __ \_______/ /__  _____
 / / / / ___/ __  / _ \/ ___/
/ /_/ / /  / /_/ /  __/ /
\____/_/   \__,_/\___/_/
   _____
  / ___/___  ______   _____  _____
  \__ \/ _ \/ ___/ | / / _ \/ ___/
 ___/ /  __/ /   | |/ /  __/ /
/____/\___/_/    |___/\___/_/
    "#
    );
}
