//! Ports - interfaces between the application and its collaborators.
//!
//! Adapters implement these traits; handlers depend on them as
//! `Arc<dyn Port>`.

mod identity;
mod payment_gateway;
mod plan_repository;
mod subscription_repository;

pub use identity::{AccountRepository, IdentityProvider, PasswordHasher, TokenIssuer};
pub use payment_gateway::{PaymentGateway, PaymentReceipt};
pub use plan_repository::PlanRepository;
pub use subscription_repository::SubscriptionRepository;
