//! In-memory repository implementations
//!
//! Used when `database.backend = "memory"` and by the scenario tests. They
//! honour the same contracts as the PostgreSQL adapters, including the email
//! uniqueness constraint.

pub mod property_store;
pub mod user_store;

pub use property_store::MemoryPropertyRepository;
pub use user_store::MemoryUserRepository;
