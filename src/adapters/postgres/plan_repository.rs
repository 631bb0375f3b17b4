//! PostgreSQL implementation of PlanRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use super::mapper::{from_column, plan_from_record, plan_to_record, to_column, PlanRecord};
use crate::domain::billing::Plan;
use crate::domain::foundation::{DomainError, ErrorCode, PlanId, Repository};
use crate::ports::PlanRepository;

const SELECT_PLAN: &str = r#"
    SELECT id, name, description, amount_cents, currency, "interval", trial_period,
           created_at, updated_at
    FROM plans
"#;

/// PostgreSQL implementation of the PlanRepository port.
pub struct PostgresPlanRepository {
    pool: PgPool,
}

impl PostgresPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: PlanId) -> DomainError {
    DomainError::new(ErrorCode::PlanNotFound, format!("plan not found: {}", id))
}

#[async_trait]
impl Repository<Plan, PlanId> for PostgresPlanRepository {
    async fn create(&self, plan: Plan) -> Result<Plan, DomainError> {
        let record = plan_to_record(&plan)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO plans (
                name, description, amount_cents, currency, "interval", trial_period,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.amount_cents)
        .bind(&record.currency)
        .bind(&record.interval)
        .bind(record.trial_period)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to create plan: {}", e)))?;

        Ok(plan.with_id(PlanId::new(from_column("id", id)?)))
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let record = plan_to_record(plan)?;

        let result = sqlx::query(
            r#"
            UPDATE plans SET
                name = $2,
                description = $3,
                amount_cents = $4,
                currency = $5,
                "interval" = $6,
                trial_period = $7,
                updated_at = $8
            WHERE id = $1
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.amount_cents)
        .bind(&record.currency)
        .bind(&record.interval)
        .bind(record.trial_period)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update plan: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(plan.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: PlanId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(to_column("id", id.as_u64())?)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete plan: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, DomainError> {
        let row: Option<PlanRecord> = sqlx::query_as(&format!("{} WHERE id = $1", SELECT_PLAN))
            .bind(to_column("id", id.as_u64())?)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to find plan: {}", e)))?;

        row.map(plan_from_record).transpose()
    }
}

#[async_trait]
impl PlanRepository for PostgresPlanRepository {
    async fn find_all(&self) -> Result<Vec<Plan>, DomainError> {
        let rows: Vec<PlanRecord> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_PLAN))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to list plans: {}", e)))?;

        rows.into_iter().map(plan_from_record).collect()
    }
}
