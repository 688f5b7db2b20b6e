pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
mod template;

pub use routes::{AppState, router};
