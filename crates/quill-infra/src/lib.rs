//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`: SeaORM
//! persistence for posts, connection management, and seed fixture loading.

pub mod database;
pub mod fixtures;

pub use database::{DatabaseConfig, SeaOrmPostRepository, connect, ensure_schema};
