//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPlanRepository` - plans table
//! - `PostgresSubscriptionRepository` - subscriptions table
//! - `mapper` - row structs and their conversion to aggregates
//!
//! The schema lives in `migrations/`.

pub mod mapper;
mod plan_repository;
mod subscription_repository;

pub use mapper::{PlanRecord, SubscriptionRecord};
pub use plan_repository::PostgresPlanRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
