//! Restaurant menu store
//!
//! An in-memory menu of dishes keyed by id, with stop-list filtering,
//! price totals, console display and CSV export.
//!
//! # Module structure
//!
//! ```text
//! restaurant/src/
//! ├── store.rs     # Restaurant: the ordered id → dish map
//! ├── export.rs    # CSV writer / reader
//! ├── display.rs   # console rendering
//! ├── config.rs    # environment configuration
//! └── logger.rs    # tracing setup
//! ```

pub mod config;
pub mod display;
pub mod export;
pub mod logger;
pub mod store;

// Re-export public types
pub use config::Config;
pub use display::{display_map, render_map};
pub use export::{DishRecord, read_csv_file, try_write_csv_file, write_csv_file};
pub use logger::{init_logger, init_logger_with_file};
pub use store::{DishMap, Restaurant};

// Re-export shared types used in the public API
pub use shared::{Dish, DishId, DishIdSequence, MenuError, MenuResult};

/// Load `.env` (if any) and initialise logging from the environment
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
