//! UpdateSubscriptionStatusHandler - Command handler for moving a
//! subscription to another status.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Subscription, SubscriptionStatus};
use crate::domain::foundation::SubscriptionId;
use crate::ports::SubscriptionRepository;

use super::{load_subscription, subscription_update_error};

#[derive(Debug, Clone)]
pub struct UpdateSubscriptionStatusCommand {
    pub subscription_id: SubscriptionId,
    /// Status code such as `Cancelled` or `PastDue`.
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct UpdateSubscriptionStatusResult {
    pub subscription: Subscription,
    pub previous_status: SubscriptionStatus,
}

/// Any status may follow any other. Reactivating a subscription while the
/// user already has another active one is rejected by the repository.
pub struct UpdateSubscriptionStatusHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl UpdateSubscriptionStatusHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSubscriptionStatusCommand,
    ) -> Result<UpdateSubscriptionStatusResult, BillingError> {
        let mut subscription =
            load_subscription(self.subscriptions.as_ref(), cmd.subscription_id).await?;
        let previous_status = subscription.status();

        subscription.update_status(&cmd.status)?;

        self.subscriptions
            .update(&subscription)
            .await
            .map_err(|e| subscription_update_error(e, &subscription))?;

        tracing::info!(
            subscription_id = %subscription.id(),
            from = %previous_status,
            to = %subscription.status(),
            "Subscription status changed"
        );

        Ok(UpdateSubscriptionStatusResult {
            subscription,
            previous_status,
        })
    }
}
