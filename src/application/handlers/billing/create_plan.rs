//! CreatePlanHandler - Command handler for publishing a new plan.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Plan, PlanInput};
use crate::ports::PlanRepository;

/// Command to create a plan.
#[derive(Debug, Clone)]
pub struct CreatePlanCommand {
    pub name: String,
    pub description: Option<String>,
    /// Three-letter ISO 4217 code, e.g. `USD`.
    pub currency: String,
    /// `Day`, `Week`, `Month` or `Year`.
    pub interval: String,
    pub amount_cents: u64,
    pub trial_period_days: Option<u32>,
}

/// Result of successful plan creation.
#[derive(Debug, Clone)]
pub struct CreatePlanResult {
    pub plan: Plan,
}

/// Handler for creating plans.
pub struct CreatePlanHandler {
    plans: Arc<dyn PlanRepository>,
}

impl CreatePlanHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, cmd: CreatePlanCommand) -> Result<CreatePlanResult, BillingError> {
        // 1. Validate every field into a plan
        let plan = Plan::create(PlanInput {
            name: &cmd.name,
            description: cmd.description.as_deref(),
            amount_cents: cmd.amount_cents,
            currency: &cmd.currency,
            trial_period_days: cmd.trial_period_days,
            interval: &cmd.interval,
        })?;

        // 2. Persist
        let plan = self.plans.create(plan).await.map_err(|e| {
            tracing::error!(error = %e, name = %cmd.name, "Failed to create plan");
            BillingError::from(e)
        })?;

        tracing::info!(
            plan_id = %plan.id(),
            interval = %plan.interval(),
            amount_cents = plan.amount().cents(),
            currency = %plan.currency(),
            "Plan created"
        );

        Ok(CreatePlanResult { plan })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPlanRepository;
    use crate::domain::billing::PlanInterval;
    use crate::domain::foundation::{DomainError, ErrorCode, ErrorKind, PlanId, Repository};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingPlanRepository;

    #[async_trait]
    impl Repository<Plan, PlanId> for FailingPlanRepository {
        async fn create(&self, _plan: Plan) -> Result<Plan, DomainError> {
            Err(DomainError::database("connection reset"))
        }

        async fn update(&self, _plan: &Plan) -> Result<(), DomainError> {
            Err(DomainError::database("connection reset"))
        }

        async fn delete(&self, _id: PlanId) -> Result<(), DomainError> {
            Err(DomainError::database("connection reset"))
        }

        async fn find_by_id(&self, _id: PlanId) -> Result<Option<Plan>, DomainError> {
            Err(DomainError::database("connection reset"))
        }
    }

    #[async_trait]
    impl PlanRepository for FailingPlanRepository {
        async fn find_all(&self) -> Result<Vec<Plan>, DomainError> {
            Err(DomainError::database("connection reset"))
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    fn command() -> CreatePlanCommand {
        CreatePlanCommand {
            name: "Premium Plan".to_string(),
            description: Some("4K streaming on four screens".to_string()),
            currency: "USD".to_string(),
            interval: "Month".to_string(),
            amount_cents: 2999,
            trial_period_days: Some(7),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn creates_and_persists_plan() {
        let repo = Arc::new(InMemoryPlanRepository::new());
        let handler = CreatePlanHandler::new(repo.clone());

        let result = handler.handle(command()).await.unwrap();

        assert!(result.plan.id().is_persisted());
        assert_eq!(result.plan.interval(), PlanInterval::Month);
        assert_eq!(result.plan.trial_period().map(|t| t.days()), Some(7));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn invalid_field_stops_before_persistence() {
        let repo = Arc::new(InMemoryPlanRepository::new());
        let handler = CreatePlanHandler::new(repo.clone());

        let err = handler
            .handle(CreatePlanCommand {
                currency: "XYZ".to_string(),
                ..command()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::InvalidCurrencyCode(ref c) if c == "XYZ"));
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn first_failing_rule_is_reported() {
        let handler = CreatePlanHandler::new(Arc::new(InMemoryPlanRepository::new()));

        let err = handler
            .handle(CreatePlanCommand {
                name: "X".to_string(),
                amount_cents: 1_000_000_000,
                ..command()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::NameTooShort));
    }

    #[tokio::test]
    async fn repository_failure_is_infrastructure() {
        let handler = CreatePlanHandler::new(Arc::new(FailingPlanRepository));

        let err = handler.handle(command()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Infrastructure);
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(err.is_retryable());
    }
}
