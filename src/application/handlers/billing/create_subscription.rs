//! CreateSubscriptionHandler - Command handler for subscribing a user to a plan.

use std::sync::Arc;

use crate::domain::billing::{BillingError, EndDateMapper, Subscription, SubscriptionInput};
use crate::domain::foundation::{ErrorCode, PlanId, Timestamp, UserId};
use crate::ports::{PaymentGateway, PaymentReceipt, PlanRepository, SubscriptionRepository};

use super::{subscription_write_error, void_charge};

/// Command to subscribe a user to a plan.
#[derive(Debug, Clone, Copy)]
pub struct CreateSubscriptionCommand {
    pub user_id: UserId,
    pub plan_id: PlanId,
}

/// Result of successful subscription.
#[derive(Debug, Clone)]
pub struct CreateSubscriptionResult {
    pub subscription: Subscription,
    /// `None` when the plan starts with a trial and nothing was charged.
    pub receipt: Option<PaymentReceipt>,
}

/// Handler for creating subscriptions.
///
/// A user may hold at most one `Active` subscription. The check below reads
/// before it writes, so two concurrent requests for one user can both pass
/// it; the repository's uniqueness guarantee (where it has one) rejects the
/// second insert and that rejection is reported as the same conflict.
pub struct CreateSubscriptionHandler {
    plans: Arc<dyn PlanRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    payments: Arc<dyn PaymentGateway>,
    end_dates: EndDateMapper,
}

impl CreateSubscriptionHandler {
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        payments: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            plans,
            subscriptions,
            payments,
            end_dates: EndDateMapper::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateSubscriptionCommand,
    ) -> Result<CreateSubscriptionResult, BillingError> {
        if !cmd.user_id.is_persisted() {
            return Err(BillingError::UserIdRequired);
        }
        if !cmd.plan_id.is_persisted() {
            return Err(BillingError::PlanIdRequired);
        }

        // 1. The plan must exist
        let plan = self
            .plans
            .find_by_id(cmd.plan_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, plan_id = %cmd.plan_id, "Failed to load plan");
                BillingError::from(e)
            })?
            .ok_or_else(|| {
                tracing::warn!(plan_id = %cmd.plan_id, "Subscription requested for unknown plan");
                BillingError::PlanNotFound(cmd.plan_id)
            })?;

        // 2. At most one active subscription per user
        let active = self
            .subscriptions
            .find_active_by_user_id(cmd.user_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, user_id = %cmd.user_id, "Failed to load subscriptions");
                BillingError::from(e)
            })?;
        if let Some(existing) = active {
            tracing::warn!(
                user_id = %cmd.user_id,
                subscription_id = %existing.id(),
                "User already has an active subscription"
            );
            return Err(BillingError::ActiveSubscriptionExists(cmd.user_id));
        }

        // 3. Period from the plan interval
        let start_date = Timestamp::now();
        let subscription = Subscription::create(SubscriptionInput {
            user_id: cmd.user_id,
            plan_id: cmd.plan_id,
            start_date,
            end_date: self.end_dates.map(start_date, plan.interval()),
        })?;

        // 4. Charge the first period unless the plan opens with a trial
        let receipt = if plan.trial_period().is_some() {
            None
        } else {
            let receipt = self
                .payments
                .charge(&subscription, &plan)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, user_id = %cmd.user_id, "Charge failed");
                    if e.code == ErrorCode::PaymentFailed {
                        BillingError::payment_failed(e.message)
                    } else {
                        BillingError::from(e)
                    }
                })?;
            Some(receipt)
        };

        // 5. Persist; a charge for a subscription that was never stored is refunded
        let subscription = match self.subscriptions.create(subscription).await {
            Ok(stored) => stored,
            Err(e) => {
                if let Some(receipt) = &receipt {
                    void_charge(self.payments.as_ref(), receipt).await;
                }
                return Err(subscription_write_error(e, cmd.user_id));
            }
        };

        tracing::info!(
            subscription_id = %subscription.id(),
            user_id = %subscription.user_id(),
            plan_id = %subscription.plan_id(),
            charged = receipt.is_some(),
            "Subscription created"
        );

        Ok(CreateSubscriptionResult {
            subscription,
            receipt,
        })
    }
}
