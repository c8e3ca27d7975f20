//! Database connection management and post persistence.

mod connection;
pub mod entity;
mod repo;

pub use connection::{DatabaseConfig, connect, ensure_schema};
pub use repo::SeaOrmPostRepository;
