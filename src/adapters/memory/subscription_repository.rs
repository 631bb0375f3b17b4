//! In-memory subscription storage.
//!
//! Writes that would leave a user with two `Active` subscriptions are
//! rejected with `ACTIVE_SUBSCRIPTION_EXISTS`, matching the partial unique
//! index the PostgreSQL schema carries.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::billing::Subscription;
use crate::domain::foundation::{DomainError, ErrorCode, Repository, SubscriptionId, UserId};
use crate::ports::SubscriptionRepository;

#[derive(Debug, Default)]
struct Store {
    subscriptions: BTreeMap<SubscriptionId, Subscription>,
    last_id: u64,
}

impl Store {
    fn has_other_active(&self, candidate: &Subscription) -> bool {
        candidate.is_active()
            && self.subscriptions.values().any(|existing| {
                existing.id() != candidate.id()
                    && existing.user_id() == candidate.user_id()
                    && existing.is_active()
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySubscriptionRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: SubscriptionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubscriptionNotFound,
        format!("subscription not found: {}", id),
    )
}

fn active_exists(user_id: UserId) -> DomainError {
    DomainError::new(
        ErrorCode::ActiveSubscriptionExists,
        format!("user already has an active subscription: {}", user_id),
    )
}

#[async_trait]
impl Repository<Subscription, SubscriptionId> for InMemorySubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> Result<Subscription, DomainError> {
        let mut store = self.store.write().await;
        if store.has_other_active(&subscription) {
            return Err(active_exists(subscription.user_id()));
        }
        store.last_id += 1;
        let id = SubscriptionId::new(store.last_id);
        let subscription = subscription.with_id(id);
        store.subscriptions.insert(id, subscription.clone());
        Ok(subscription)
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if !store.subscriptions.contains_key(&subscription.id()) {
            return Err(not_found(subscription.id()));
        }
        if store.has_other_active(subscription) {
            return Err(active_exists(subscription.user_id()));
        }
        store
            .subscriptions
            .insert(subscription.id(), subscription.clone());
        Ok(())
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        self.store
            .write()
            .await
            .subscriptions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_id(&self, id: SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        Ok(self.store.read().await.subscriptions.get(&id).cloned())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Subscription>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .subscriptions
            .values()
            .filter(|s| s.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_active_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .subscriptions
            .values()
            .find(|s| s.user_id() == user_id && s.is_active())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::SubscriptionInput;
    use crate::domain::foundation::{PlanId, Timestamp};

    fn subscription(user: u64) -> Subscription {
        Subscription::create(SubscriptionInput {
            user_id: UserId::new(user),
            plan_id: PlanId::new(1),
            start_date: Timestamp::now(),
            end_date: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn second_active_subscription_for_user_is_rejected() {
        let repo = InMemorySubscriptionRepository::new();
        repo.create(subscription(7)).await.unwrap();

        let err = repo.create(subscription(7)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ActiveSubscriptionExists);
    }

    #[tokio::test]
    async fn inactive_subscriptions_do_not_block_new_ones() {
        let repo = InMemorySubscriptionRepository::new();
        let mut first = repo.create(subscription(7)).await.unwrap();
        first.update_status("Cancelled").unwrap();
        repo.update(&first).await.unwrap();

        let second = repo.create(subscription(7)).await.unwrap();

        assert_eq!(repo.find_by_user_id(UserId::new(7)).await.unwrap().len(), 2);
        assert_eq!(
            repo.find_active_by_user_id(UserId::new(7))
                .await
                .unwrap()
                .map(|s| s.id()),
            Some(second.id())
        );
    }

    #[tokio::test]
    async fn reactivating_while_another_is_active_is_rejected() {
        let repo = InMemorySubscriptionRepository::new();
        let mut first = repo.create(subscription(7)).await.unwrap();
        first.update_status("Expired").unwrap();
        repo.update(&first).await.unwrap();
        repo.create(subscription(7)).await.unwrap();

        first.update_status("Active").unwrap();
        let err = repo.update(&first).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ActiveSubscriptionExists);
    }

    #[tokio::test]
    async fn lookups_are_scoped_to_user() {
        let repo = InMemorySubscriptionRepository::new();
        repo.create(subscription(1)).await.unwrap();
        repo.create(subscription(2)).await.unwrap();

        assert_eq!(repo.find_by_user_id(UserId::new(1)).await.unwrap().len(), 1);
        assert!(repo
            .find_active_by_user_id(UserId::new(3))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_unknown_subscription_is_not_found() {
        let repo = InMemorySubscriptionRepository::new();
        let orphan = subscription(1).with_id(SubscriptionId::new(42));

        let err = repo.update(&orphan).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SubscriptionNotFound);
    }
}
