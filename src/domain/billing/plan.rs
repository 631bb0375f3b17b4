//! Plan aggregate.
//!
//! A plan is the priced offer a subscription points at. Plans are immutable
//! once built; changing one means building a new value.

use serde::Serialize;

use crate::domain::foundation::{PlanId, Timestamp};

use super::{Amount, BillingError, Currency, Description, PlanInterval, PlanName, TrialPeriod};

/// Raw plan fields as they arrive from a caller or from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanInput<'a> {
    pub name: &'a str,
    /// `None` and blank text both mean "no description".
    pub description: Option<&'a str>,
    pub amount_cents: u64,
    pub currency: &'a str,
    /// `None` means the plan has no trial; `Some(0)` is rejected.
    pub trial_period_days: Option<u32>,
    pub interval: &'a str,
}

/// Plan aggregate.
///
/// # Invariants
///
/// - every component satisfies its value-object rules
/// - `id` is `0` until storage assigns one
/// - a restored plan always has a nonzero `id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    id: PlanId,
    name: PlanName,
    description: Option<Description>,
    amount: Amount,
    currency: Currency,
    interval: PlanInterval,
    trial_period: Option<TrialPeriod>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Validated components shared by both construction paths.
struct PlanParts {
    name: PlanName,
    description: Option<Description>,
    amount: Amount,
    currency: Currency,
    interval: PlanInterval,
    trial_period: Option<TrialPeriod>,
}

impl PlanParts {
    /// Validates name, description, amount, currency, trial period and
    /// interval in that order, stopping at the first failure.
    fn validate(input: &PlanInput<'_>) -> Result<Self, BillingError> {
        let name = PlanName::try_new(input.name)?;
        let description = match input.description {
            Some(text) => Some(Description::try_new(text)?).filter(|d| !d.is_empty()),
            None => None,
        };
        let amount = Amount::try_new(input.amount_cents)?;
        let currency = Currency::try_new(input.currency)?;
        let trial_period = input.trial_period_days.map(TrialPeriod::try_new).transpose()?;
        let interval = PlanInterval::from_code(input.interval)?;

        Ok(Self {
            name,
            description,
            amount,
            currency,
            interval,
            trial_period,
        })
    }
}

impl Plan {
    /// Builds a new, not yet persisted plan stamped with the current time.
    pub fn create(input: PlanInput<'_>) -> Result<Self, BillingError> {
        let parts = PlanParts::validate(&input)?;
        let now = Timestamp::now();
        Ok(Self::assemble(PlanId::UNASSIGNED, parts, now, now))
    }

    /// Rebuilds a stored plan, re-running every validation.
    ///
    /// # Errors
    ///
    /// `PlanIdRequired` when `id` is the unassigned sentinel, otherwise the
    /// first component rule violated.
    pub fn restore(
        id: PlanId,
        input: PlanInput<'_>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Result<Self, BillingError> {
        if !id.is_persisted() {
            return Err(BillingError::PlanIdRequired);
        }
        let parts = PlanParts::validate(&input)?;
        Ok(Self::assemble(id, parts, created_at, updated_at))
    }

    fn assemble(id: PlanId, parts: PlanParts, created_at: Timestamp, updated_at: Timestamp) -> Self {
        Self {
            id,
            name: parts.name,
            description: parts.description,
            amount: parts.amount,
            currency: parts.currency,
            interval: parts.interval,
            trial_period: parts.trial_period,
            created_at,
            updated_at,
        }
    }

    /// Returns the same plan carrying the identifier storage assigned.
    pub fn with_id(mut self, id: PlanId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn name(&self) -> &PlanName {
        &self.name
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn interval(&self) -> PlanInterval {
        self.interval
    }

    pub fn trial_period(&self) -> Option<TrialPeriod> {
        self.trial_period
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premium() -> PlanInput<'static> {
        PlanInput {
            name: "Premium HD",
            description: Some("Four screens, HD and Ultra HD"),
            amount_cents: 1999,
            currency: "USD",
            trial_period_days: Some(14),
            interval: "Month",
        }
    }

    #[test]
    fn create_builds_unpersisted_plan() {
        let plan = Plan::create(premium()).unwrap();

        assert_eq!(plan.id(), PlanId::UNASSIGNED);
        assert_eq!(plan.name().as_str(), "Premium HD");
        assert_eq!(
            plan.description().map(|d| d.as_str()),
            Some("Four screens, HD and Ultra HD")
        );
        assert_eq!(plan.amount().cents(), 1999);
        assert_eq!(plan.currency().code(), "USD");
        assert_eq!(plan.trial_period().map(|t| t.days()), Some(14));
        assert_eq!(plan.interval(), PlanInterval::Month);
        assert_eq!(plan.created_at(), plan.updated_at());
    }

    #[test]
    fn blank_description_and_missing_trial_are_absent() {
        let plan = Plan::create(PlanInput {
            description: Some("   "),
            trial_period_days: None,
            ..premium()
        })
        .unwrap();

        assert!(plan.description().is_none());
        assert!(plan.trial_period().is_none());
    }

    #[test]
    fn reports_first_failure_in_validation_order() {
        let err = Plan::create(PlanInput {
            name: "X",
            amount_cents: 1_000_000_000,
            currency: "XYZ",
            interval: "Fortnight",
            ..premium()
        })
        .unwrap_err();
        assert!(matches!(err, BillingError::NameTooShort));

        let err = Plan::create(PlanInput {
            amount_cents: 1_000_000_000,
            currency: "XYZ",
            ..premium()
        })
        .unwrap_err();
        assert!(matches!(err, BillingError::AmountExceedsMaximum));

        let err = Plan::create(PlanInput {
            currency: "XYZ",
            trial_period_days: Some(0),
            ..premium()
        })
        .unwrap_err();
        assert!(matches!(err, BillingError::InvalidCurrencyCode(_)));

        let err = Plan::create(PlanInput {
            trial_period_days: Some(31),
            interval: "Fortnight",
            ..premium()
        })
        .unwrap_err();
        assert!(matches!(err, BillingError::TrialPeriodTooLong));

        let err = Plan::create(PlanInput {
            interval: "month",
            ..premium()
        })
        .unwrap_err();
        assert!(matches!(err, BillingError::InvalidPlanInterval(_)));
    }

    #[test]
    fn same_input_builds_equal_plans_apart_from_timestamps() {
        let a = Plan::create(premium()).unwrap();
        let b = Plan::create(premium()).unwrap();
        let restamped = Plan::restore(PlanId::new(1), premium(), a.created_at(), a.updated_at())
            .unwrap()
            .with_id(PlanId::UNASSIGNED);

        assert_eq!(a, restamped);
        assert_eq!(a.name(), b.name());
        assert_eq!(a.currency(), b.currency());
    }

    #[test]
    fn restore_keeps_identity_and_timestamps() {
        let created = Timestamp::now();
        let plan = Plan::restore(PlanId::new(42), premium(), created, created).unwrap();

        assert_eq!(plan.id(), PlanId::new(42));
        assert_eq!(plan.created_at(), created);
    }

    #[test]
    fn restore_requires_an_id() {
        let now = Timestamp::now();
        assert!(matches!(
            Plan::restore(PlanId::UNASSIGNED, premium(), now, now),
            Err(BillingError::PlanIdRequired)
        ));
    }

    #[test]
    fn restore_revalidates_components() {
        let now = Timestamp::now();
        assert!(matches!(
            Plan::restore(PlanId::new(1), PlanInput { currency: "US", ..premium() }, now, now),
            Err(BillingError::CurrencyCodeInvalidLength)
        ));
    }
}
