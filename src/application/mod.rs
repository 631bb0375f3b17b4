//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (write) and queries (read) have separate handlers.

pub mod handlers;

pub use handlers::*;
