//! SetAutoRenewHandler - Command handler toggling automatic renewal.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Subscription};
use crate::domain::foundation::SubscriptionId;
use crate::ports::SubscriptionRepository;

use super::{load_subscription, subscription_update_error};

#[derive(Debug, Clone, Copy)]
pub struct SetAutoRenewCommand {
    pub subscription_id: SubscriptionId,
    pub auto_renew: bool,
}

#[derive(Debug, Clone)]
pub struct SetAutoRenewResult {
    pub subscription: Subscription,
}

pub struct SetAutoRenewHandler {
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl SetAutoRenewHandler {
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscriptions }
    }

    pub async fn handle(&self, cmd: SetAutoRenewCommand) -> Result<SetAutoRenewResult, BillingError> {
        let mut subscription =
            load_subscription(self.subscriptions.as_ref(), cmd.subscription_id).await?;

        subscription.set_auto_renew(cmd.auto_renew);

        self.subscriptions
            .update(&subscription)
            .await
            .map_err(|e| subscription_update_error(e, &subscription))?;

        tracing::info!(
            subscription_id = %subscription.id(),
            auto_renew = cmd.auto_renew,
            "Subscription auto-renew updated"
        );

        Ok(SetAutoRenewResult { subscription })
    }
}
