//! Stub payment gateway.
//!
//! Approves every charge unless built with [`StubPaymentGateway::declining`].
//! Records settled and refunded charges so tests can assert on them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::billing::{Plan, Subscription};
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{PaymentGateway, PaymentReceipt};

#[derive(Debug, Default)]
pub struct StubPaymentGateway {
    decline_reason: Option<String>,
    sequence: AtomicU64,
    receipts: Mutex<Vec<PaymentReceipt>>,
    refunds: Mutex<Vec<PaymentReceipt>>,
}

impl StubPaymentGateway {
    /// A gateway that accepts every charge.
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that declines every charge with `reason`.
    pub fn declining(reason: impl Into<String>) -> Self {
        Self {
            decline_reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Accepted charges that were not refunded, oldest first.
    pub fn receipts(&self) -> Vec<PaymentReceipt> {
        self.receipts
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Refunded charges, in refund order.
    pub fn refunds(&self) -> Vec<PaymentReceipt> {
        self.refunds
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for StubPaymentGateway {
    async fn charge(
        &self,
        subscription: &Subscription,
        plan: &Plan,
    ) -> Result<PaymentReceipt, DomainError> {
        if let Some(reason) = &self.decline_reason {
            tracing::warn!(
                user_id = %subscription.user_id(),
                plan_id = %plan.id(),
                reason = %reason,
                "Stub gateway declined charge"
            );
            return Err(DomainError::new(ErrorCode::PaymentFailed, reason.clone()));
        }

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let receipt = PaymentReceipt {
            reference: format!("stub_ch_{:08}", sequence),
            user_id: subscription.user_id(),
            amount_cents: plan.amount().cents(),
            currency: plan.currency().code().to_string(),
            charged_at: Timestamp::now(),
        };

        tracing::info!(
            reference = %receipt.reference,
            user_id = %receipt.user_id,
            amount_cents = receipt.amount_cents,
            currency = %receipt.currency,
            "Stub gateway accepted charge"
        );

        if let Ok(mut receipts) = self.receipts.lock() {
            receipts.push(receipt.clone());
        }
        Ok(receipt)
    }

    async fn refund(&self, receipt: &PaymentReceipt) -> Result<(), DomainError> {
        let refunded = self.receipts.lock().ok().and_then(|mut receipts| {
            let position = receipts
                .iter()
                .position(|r| r.reference == receipt.reference)?;
            Some(receipts.remove(position))
        });

        match refunded {
            Some(charge) => {
                tracing::info!(reference = %charge.reference, "Stub gateway refunded charge");
                if let Ok(mut refunds) = self.refunds.lock() {
                    refunds.push(charge);
                }
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::PaymentFailed,
                format!("no open charge {}", receipt.reference),
            )),
        }
    }
}
