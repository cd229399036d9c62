//! Item service: CRUD HTTP API over a single item collection.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod query;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Item, ItemPatch, NewItem};
pub use query::ListQuery;
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_items_table, ItemStore, PgItemStore};
