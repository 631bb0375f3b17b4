//! Subscription repository port.
//!
//! # Concurrency
//!
//! Callers enforce "one active subscription per user" by reading
//! `find_active_by_user_id` before `create`. Two concurrent creations for the
//! same user can both pass that read. Implementations backed by a database
//! should add a uniqueness constraint over active rows per user and report
//! its violation as `ACTIVE_SUBSCRIPTION_EXISTS`.

use async_trait::async_trait;

use crate::domain::billing::Subscription;
use crate::domain::foundation::{DomainError, Repository, SubscriptionId, UserId};

/// Persistence for subscriptions.
///
/// `update` and `delete` on a missing id fail with `SUBSCRIPTION_NOT_FOUND`.
#[async_trait]
pub trait SubscriptionRepository: Repository<Subscription, SubscriptionId> {
    /// All subscriptions of a user, any status, ordered by id.
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Subscription>, DomainError>;

    /// The user's `Active` subscription, if any.
    async fn find_active_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Subscription>, DomainError>;
}
