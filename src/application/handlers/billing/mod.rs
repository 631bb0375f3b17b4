//! Billing handlers.
//!
//! ## Commands
//! - Creating plans
//! - Subscribing a user to a plan
//! - Changing a subscription's status or auto-renew flag
//! - Renewing a subscription for another period
//!
//! ## Queries
//! - Listing plans
//! - Listing a user's subscriptions

mod create_plan;
mod create_subscription;
mod get_user_subscriptions;
mod list_plans;
mod renew_subscription;
mod set_auto_renew;
mod update_subscription_status;

use crate::domain::billing::{BillingError, Subscription};
use crate::domain::foundation::{DomainError, ErrorCode, SubscriptionId, UserId};
use crate::ports::{PaymentGateway, PaymentReceipt, SubscriptionRepository};

// Commands
pub use create_plan::{CreatePlanCommand, CreatePlanHandler, CreatePlanResult};
pub use create_subscription::{
    CreateSubscriptionCommand, CreateSubscriptionHandler, CreateSubscriptionResult,
};
pub use renew_subscription::{
    RenewSubscriptionCommand, RenewSubscriptionHandler, RenewSubscriptionResult,
};
pub use set_auto_renew::{SetAutoRenewCommand, SetAutoRenewHandler, SetAutoRenewResult};
pub use update_subscription_status::{
    UpdateSubscriptionStatusCommand, UpdateSubscriptionStatusHandler,
    UpdateSubscriptionStatusResult,
};

// Queries
pub use get_user_subscriptions::{
    GetUserSubscriptionsHandler, GetUserSubscriptionsQuery, GetUserSubscriptionsResult,
};
pub use list_plans::{ListPlansHandler, ListPlansQuery, ListPlansResult};

async fn load_subscription(
    subscriptions: &dyn SubscriptionRepository,
    id: SubscriptionId,
) -> Result<Subscription, BillingError> {
    subscriptions
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, subscription_id = %id, "Failed to load subscription");
            BillingError::from(e)
        })?
        .ok_or(BillingError::SubscriptionNotFound(id))
}

/// Maps a failed subscription insert. The one-active-per-user rule becomes
/// the typed conflict.
fn subscription_write_error(err: DomainError, user_id: UserId) -> BillingError {
    if err.code == ErrorCode::ActiveSubscriptionExists {
        tracing::warn!(user_id = %user_id, "Active subscription constraint rejected write");
        return BillingError::ActiveSubscriptionExists(user_id);
    }
    tracing::error!(error = %err, user_id = %user_id, "Failed to persist subscription");
    BillingError::from(err)
}

fn subscription_update_error(err: DomainError, subscription: &Subscription) -> BillingError {
    if err.code == ErrorCode::SubscriptionNotFound {
        return BillingError::SubscriptionNotFound(subscription.id());
    }
    subscription_write_error(err, subscription.user_id())
}

/// Refunds a charge whose subscription write failed. A failed refund is
/// logged for manual follow-up; the caller still reports the write error.
async fn void_charge(payments: &dyn PaymentGateway, receipt: &PaymentReceipt) {
    match payments.refund(receipt).await {
        Ok(()) => tracing::warn!(
            reference = %receipt.reference,
            user_id = %receipt.user_id,
            "Charge refunded after failed subscription write"
        ),
        Err(e) => tracing::error!(
            error = %e,
            reference = %receipt.reference,
            user_id = %receipt.user_id,
            amount_cents = receipt.amount_cents,
            "Refund failed; charge needs manual reversal"
        ),
    }
}
