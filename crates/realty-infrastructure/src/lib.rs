//! # Realty Infrastructure
//! 
//! Storage implementations (adapters) of the core repository ports.

pub mod database;
pub mod memory;
pub mod storage;

pub use database::{create_pool, PgPropertyRepository, PgUserRepository};
pub use memory::{MemoryPropertyRepository, MemoryUserRepository};
pub use storage::{connect, Repositories};
