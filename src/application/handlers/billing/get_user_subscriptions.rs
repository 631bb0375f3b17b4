//! GetUserSubscriptionsHandler - Query handler for a user's subscriptions.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Subscription};
use crate::domain::foundation::UserId;
use crate::ports::SubscriptionRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetUserSubscriptionsQuery {
    pub user_id: UserId,
}

#[derive(Debug, Clone)]
pub struct GetUserSubscriptionsResult {
    /// Every subscription of the user, any status.
    pub subscriptions: Vec<Subscription>,
}

impl GetUserSubscriptionsResult {
    /// The one `Active` subscription, if any.
    pub fn active(&self) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| s.is_active())
    }
}

pub struct GetUserSubscriptionsHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl GetUserSubscriptionsHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(
        &self,
        query: GetUserSubscriptionsQuery,
    ) -> Result<GetUserSubscriptionsResult, BillingError> {
        if !query.user_id.is_persisted() {
            return Err(BillingError::UserIdRequired);
        }
        let subscriptions = self
            .subscriptions
            .find_by_user_id(query.user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %query.user_id, "Failed to load subscriptions");
                BillingError::from(e)
            })?;
        Ok(GetUserSubscriptionsResult { subscriptions })
    }
}
