//! Subscription aggregate and its lifecycle.
//!
//! # Invariants
//!
//! - `user_id` and `plan_id` are nonzero
//! - `start_date` is set
//! - `end_date`, when present, is not before `start_date`
//!
//! Every mutator either fully applies or leaves the subscription untouched.

use serde::Serialize;

use crate::domain::foundation::{PlanId, SubscriptionId, Timestamp, UserId};

use super::{BillingError, SubscriptionStatus};

/// Linkage and period of a subscription, shared by both construction paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionInput {
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub start_date: Timestamp,
    /// `None` for a subscription that never expires.
    pub end_date: Option<Timestamp>,
}

impl SubscriptionInput {
    /// Checks user, plan, start date and end date in that order.
    fn validate(&self) -> Result<(), BillingError> {
        if !self.user_id.is_persisted() {
            return Err(BillingError::UserIdRequired);
        }
        if !self.plan_id.is_persisted() {
            return Err(BillingError::PlanIdRequired);
        }
        if self.start_date.is_zero() {
            return Err(BillingError::StartDateRequired);
        }
        if let Some(end) = self.end_date {
            if end.is_before(&self.start_date) {
                return Err(BillingError::EndDateBeforeStartDate);
            }
        }
        Ok(())
    }
}

/// A user's subscription to a plan.
///
/// References its user and plan by identifier only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    id: SubscriptionId,
    user_id: UserId,
    plan_id: PlanId,
    status: SubscriptionStatus,
    start_date: Timestamp,
    end_date: Option<Timestamp>,
    auto_renew: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Subscription {
    /// Builds a new, not yet persisted subscription: `Active` and auto-renewing.
    pub fn create(input: SubscriptionInput) -> Result<Self, BillingError> {
        input.validate()?;
        let now = Timestamp::now();
        Ok(Self {
            id: SubscriptionId::UNASSIGNED,
            user_id: input.user_id,
            plan_id: input.plan_id,
            status: SubscriptionStatus::Active,
            start_date: input.start_date,
            end_date: input.end_date,
            auto_renew: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a stored subscription with the same checks as [`create`](Self::create),
    /// then parses the stored status code.
    pub fn restore(
        id: SubscriptionId,
        input: SubscriptionInput,
        status: &str,
        auto_renew: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, BillingError> {
        if !id.is_persisted() {
            return Err(BillingError::SubscriptionIdRequired);
        }
        input.validate()?;
        let status = SubscriptionStatus::from_code(status)?;
        Ok(Self {
            id,
            user_id: input.user_id,
            plan_id: input.plan_id,
            status,
            start_date: input.start_date,
            end_date: input.end_date,
            auto_renew,
            created_at,
            updated_at,
        })
    }

    /// Returns the same subscription carrying the identifier storage assigned.
    pub fn with_id(mut self, id: SubscriptionId) -> Self {
        self.id = id;
        self
    }

    /// Replaces the status with the one named by `code`.
    ///
    /// Any status may follow any other. An unknown code changes nothing.
    pub fn update_status(&mut self, code: &str) -> Result<(), BillingError> {
        let status = SubscriptionStatus::from_code(code)?;
        self.status = status;
        self.touch();
        Ok(())
    }

    /// Moves the end of the current period.
    ///
    /// # Errors
    ///
    /// `EndDateBeforeStartDate` if `end_date` precedes the start date; the
    /// subscription is left unchanged.
    pub fn update_end_date(&mut self, end_date: Timestamp) -> Result<(), BillingError> {
        if end_date.is_before(&self.start_date) {
            return Err(BillingError::EndDateBeforeStartDate);
        }
        self.end_date = Some(end_date);
        self.touch();
        Ok(())
    }

    pub fn set_auto_renew(&mut self, auto_renew: bool) {
        self.auto_renew = auto_renew;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn plan_id(&self) -> PlanId {
        self.plan_id
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn start_date(&self) -> Timestamp {
        self.start_date
    }

    pub fn end_date(&self) -> Option<Timestamp> {
        self.end_date
    }

    pub fn auto_renew(&self) -> bool {
        self.auto_renew
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
