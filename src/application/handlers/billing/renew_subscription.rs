//! RenewSubscriptionHandler - Command handler rolling a subscription into
//! its next period.

use std::sync::Arc;

use crate::domain::billing::{BillingError, EndDateMapper, Subscription, SubscriptionStatus};
use crate::domain::foundation::{ErrorCode, SubscriptionId, Timestamp};
use crate::ports::{PaymentGateway, PaymentReceipt, PlanRepository, SubscriptionRepository};

use super::{load_subscription, subscription_update_error, void_charge};

#[derive(Debug, Clone, Copy)]
pub struct RenewSubscriptionCommand {
    pub subscription_id: SubscriptionId,
}

#[derive(Debug, Clone)]
pub struct RenewSubscriptionResult {
    pub subscription: Subscription,
    pub receipt: PaymentReceipt,
    /// End of the period that was just closed.
    pub previous_end_date: Option<Timestamp>,
}

/// Handler for renewing subscriptions.
///
/// Renewal extends by exactly one plan interval, counted from the current
/// end date (or the start date for open-ended subscriptions). Only `Active`
/// subscriptions with auto-renew on qualify. A declined charge moves the
/// subscription to `PastDue` and leaves its end date alone.
pub struct RenewSubscriptionHandler {
    plans: Arc<dyn PlanRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    payments: Arc<dyn PaymentGateway>,
    end_dates: EndDateMapper,
}

impl RenewSubscriptionHandler {
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
        cmd: RenewSubscriptionCommand,
    ) -> Result<RenewSubscriptionResult, BillingError> {
        // 1. Load and check eligibility
        let mut subscription =
            load_subscription(self.subscriptions.as_ref(), cmd.subscription_id).await?;
        if !subscription.is_active() {
            return Err(BillingError::invalid_state(
                subscription.status().as_code(),
                "renew",
            ));
        }
        if !subscription.auto_renew() {
            return Err(BillingError::AutoRenewDisabled(subscription.id()));
        }

        // 2. Next period from the plan interval
        let plan = self
            .plans
            .find_by_id(subscription.plan_id())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, plan_id = %subscription.plan_id(), "Failed to load plan");
                BillingError::from(e)
            })?
            .ok_or(BillingError::PlanNotFound(subscription.plan_id()))?;
        let previous_end_date = subscription.end_date();
        let period_start = previous_end_date.unwrap_or_else(|| subscription.start_date());
        let next_end = self
            .end_dates
            .map(period_start, plan.interval())
            .ok_or_else(|| BillingError::infrastructure("renewal period ends outside the calendar"))?;

        // 3. Charge; a decline marks the subscription past due
        let receipt = match self.payments.charge(&subscription, &plan).await {
            Ok(receipt) => receipt,
            Err(e) if e.code == ErrorCode::PaymentFailed => {
                tracing::warn!(
                    subscription_id = %subscription.id(),
                    error = %e,
                    "Renewal charge declined"
                );
                subscription.update_status(SubscriptionStatus::PastDue.as_code())?;
                self.subscriptions
                    .update(&subscription)
                    .await
                    .map_err(|e| subscription_update_error(e, &subscription))?;
                return Err(BillingError::payment_failed(e.message));
            }
            Err(e) => {
                tracing::error!(subscription_id = %subscription.id(), error = %e, "Renewal charge errored");
                return Err(BillingError::from(e));
            }
        };

        // 4. Extend and persist; an extension that was not stored is refunded
        let extended = match subscription.update_end_date(next_end) {
            Ok(()) => self
                .subscriptions
                .update(&subscription)
                .await
                .map_err(|e| subscription_update_error(e, &subscription)),
            Err(e) => Err(e),
        };
        if let Err(e) = extended {
            void_charge(self.payments.as_ref(), &receipt).await;
            return Err(e);
        }

        tracing::info!(
            subscription_id = %subscription.id(),
            end_date = %next_end,
            reference = %receipt.reference,
            "Subscription renewed"
        );

        Ok(RenewSubscriptionResult {
            subscription,
            receipt,
            previous_end_date,
        })
    }
}
