//! In-memory repositories for tests and local development.

mod account_repository;
mod plan_repository;
mod subscription_repository;

pub use account_repository::InMemoryAccountRepository;
pub use plan_repository::InMemoryPlanRepository;
pub use subscription_repository::InMemorySubscriptionRepository;
