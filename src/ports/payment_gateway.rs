//! Payment gateway port.
//!
//! Charges subscription periods and voids charges whose subscription write
//! did not land. Only a stub implementation exists; processor integrations
//! plug in behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::billing::{Plan, Subscription};
use crate::domain::foundation::{DomainError, Timestamp, UserId};

/// Proof that a charge was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Processor-side reference for the charge.
    pub reference: String,
    pub user_id: UserId,
    pub amount_cents: u64,
    pub currency: String,
    pub charged_at: Timestamp,
}

/// Port for charging subscribers.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `plan`'s price for `subscription`.
    ///
    /// # Errors
    ///
    /// `PAYMENT_FAILED` when the charge is declined.
    async fn charge(
        &self,
        subscription: &Subscription,
        plan: &Plan,
    ) -> Result<PaymentReceipt, DomainError>;

    /// Reverses an accepted charge in full.
    ///
    /// # Errors
    ///
    /// `PAYMENT_FAILED` when the processor has no open charge under
    /// `receipt.reference`.
    async fn refund(&self, receipt: &PaymentReceipt) -> Result<(), DomainError>;
}
