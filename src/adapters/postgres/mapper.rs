//! Row mapping between billing aggregates and their table layout.
//!
//! Rows are rebuilt through the aggregates' `restore` constructors, so a
//! row that no longer satisfies the domain rules surfaces as an error
//! instead of a half-valid aggregate.

use chrono::{DateTime, Utc};

use crate::domain::billing::{Plan, PlanInput, Subscription, SubscriptionInput};
use crate::domain::foundation::{
    DomainError, PlanId, SubscriptionId, Timestamp, UserId,
};

/// Row of the `plans` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PlanRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub interval: String,
    /// Days; `NULL` and `0` both mean "no trial".
    pub trial_period: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the `subscriptions` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SubscriptionRecord {
    pub id: i64,
    pub user_id: i64,
    pub plan_id: i64,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub auto_renew: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn plan_to_record(plan: &Plan) -> Result<PlanRecord, DomainError> {
    Ok(PlanRecord {
        id: to_column("id", plan.id().as_u64())?,
        name: plan.name().as_str().to_string(),
        description: plan.description().map(|d| d.as_str().to_string()),
        amount_cents: to_column("amount_cents", plan.amount().cents())?,
        currency: plan.currency().code().to_string(),
        interval: plan.interval().as_code().to_string(),
        trial_period: plan
            .trial_period()
            .map(|t| i32::try_from(t.days()))
            .transpose()
            .map_err(|_| DomainError::validation("trial_period", "trial period out of range"))?,
        created_at: *plan.created_at().as_datetime(),
        updated_at: *plan.updated_at().as_datetime(),
    })
}

pub fn plan_from_record(record: PlanRecord) -> Result<Plan, DomainError> {
    let trial_period_days = match record.trial_period {
        None | Some(0) => None,
        Some(days) => Some(u32::try_from(days).map_err(|_| {
            DomainError::validation("trial_period", format!("negative trial period: {}", days))
        })?),
    };
    let input = PlanInput {
        name: &record.name,
        description: record.description.as_deref(),
        amount_cents: from_column("amount_cents", record.amount_cents)?,
        currency: &record.currency,
        trial_period_days,
        interval: &record.interval,
    };

    Plan::restore(
        PlanId::new(from_column("id", record.id)?),
        input,
        Timestamp::from_datetime(record.created_at),
        Timestamp::from_datetime(record.updated_at),
    )
    .map_err(|e| DomainError::from(e).with_detail("plan_id", record.id.to_string()))
}

pub fn subscription_to_record(subscription: &Subscription) -> Result<SubscriptionRecord, DomainError> {
    Ok(SubscriptionRecord {
        id: to_column("id", subscription.id().as_u64())?,
        user_id: to_column("user_id", subscription.user_id().as_u64())?,
        plan_id: to_column("plan_id", subscription.plan_id().as_u64())?,
        status: subscription.status().as_code().to_string(),
        start_date: *subscription.start_date().as_datetime(),
        end_date: subscription.end_date().map(|t| *t.as_datetime()),
        auto_renew: subscription.auto_renew(),
        created_at: *subscription.created_at().as_datetime(),
        updated_at: *subscription.updated_at().as_datetime(),
    })
}

pub fn subscription_from_record(record: SubscriptionRecord) -> Result<Subscription, DomainError> {
    let input = SubscriptionInput {
        user_id: UserId::new(from_column("user_id", record.user_id)?),
        plan_id: PlanId::new(from_column("plan_id", record.plan_id)?),
        start_date: Timestamp::from_datetime(record.start_date),
        end_date: record.end_date.map(Timestamp::from_datetime),
    };

    Subscription::restore(
        SubscriptionId::new(from_column("id", record.id)?),
        input,
        &record.status,
        record.auto_renew,
        Timestamp::from_datetime(record.created_at),
        Timestamp::from_datetime(record.updated_at),
    )
    .map_err(|e| DomainError::from(e).with_detail("subscription_id", record.id.to_string()))
}

/// Unsigned domain value into a `BIGINT` column.
pub(super) fn to_column(field: &'static str, value: u64) -> Result<i64, DomainError> {
    i64::try_from(value)
        .map_err(|_| DomainError::validation(field, format!("{} out of range: {}", field, value)))
}

/// `BIGINT` column into an unsigned domain value.
pub(super) fn from_column(field: &'static str, value: i64) -> Result<u64, DomainError> {
    u64::try_from(value)
        .map_err(|_| DomainError::validation(field, format!("negative {}: {}", field, value)))
}
