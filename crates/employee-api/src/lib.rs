pub mod config;
pub mod database;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod state;
pub mod utils;
