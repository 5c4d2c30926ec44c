//! # Realty API
//! 
//! HTTP handlers, DTOs, error mapping, and the message catalogue.

pub mod auth;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
