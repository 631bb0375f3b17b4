//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory repositories (tests, local runs)
//! - `postgres` - PostgreSQL repositories
//! - `payment` - payment gateway stub
//! - `identity` - Argon2 password hashing and JWT tokens

pub mod identity;
pub mod memory;
pub mod payment;
pub mod postgres;

pub use identity::{Argon2PasswordHasher, JwtTokenService};
pub use memory::{InMemoryAccountRepository, InMemoryPlanRepository, InMemorySubscriptionRepository};
pub use payment::StubPaymentGateway;
pub use postgres::{PostgresPlanRepository, PostgresSubscriptionRepository};
