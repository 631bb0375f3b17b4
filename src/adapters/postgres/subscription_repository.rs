//! PostgreSQL implementation of SubscriptionRepository.
//!
//! The `subscriptions_one_active_per_user` partial unique index closes the
//! race between the handler's active-subscription check and the insert.
//! Its violation is reported as `ACTIVE_SUBSCRIPTION_EXISTS`.

use async_trait::async_trait;
use sqlx::PgPool;

use super::mapper::{
    from_column, subscription_from_record, subscription_to_record, to_column, SubscriptionRecord,
};
use crate::domain::billing::Subscription;
use crate::domain::foundation::{DomainError, ErrorCode, Repository, SubscriptionId, UserId};
use crate::ports::SubscriptionRepository;

const ONE_ACTIVE_PER_USER: &str = "subscriptions_one_active_per_user";

const SELECT_SUBSCRIPTION: &str = r#"
    SELECT id, user_id, plan_id, status, start_date, end_date, auto_renew,
           created_at, updated_at
    FROM subscriptions
"#;

pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: SubscriptionId) -> DomainError {
    DomainError::new(
        ErrorCode::SubscriptionNotFound,
        format!("subscription not found: {}", id),
    )
}

/// Maps a write failure, recognising the one-active-per-user index.
fn write_error(action: &str, user_id: UserId, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some(ONE_ACTIVE_PER_USER) {
            return DomainError::new(
                ErrorCode::ActiveSubscriptionExists,
                format!("user already has an active subscription: {}", user_id),
            );
        }
    }
    DomainError::database(format!("Failed to {} subscription: {}", action, e))
}

#[async_trait]
impl Repository<Subscription, SubscriptionId> for PostgresSubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> Result<Subscription, DomainError> {
        let record = subscription_to_record(&subscription)?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO subscriptions (
                user_id, plan_id, status, start_date, end_date, auto_renew,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(record.user_id)
        .bind(record.plan_id)
        .bind(&record.status)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.auto_renew)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error("create", subscription.user_id(), e))?;

        Ok(subscription.with_id(SubscriptionId::new(from_column("id", id)?)))
    }

    async fn update(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let record = subscription_to_record(subscription)?;

        let result = sqlx::query(
            r#"
            UPDATE subscriptions SET
                plan_id = $2,
                status = $3,
                start_date = $4,
                end_date = $5,
                auto_renew = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(record.id)
        .bind(record.plan_id)
        .bind(&record.status)
        .bind(record.start_date)
        .bind(record.end_date)
        .bind(record.auto_renew)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error("update", subscription.user_id(), e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(subscription.id()));
        }
        Ok(())
    }

    async fn delete(&self, id: SubscriptionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(to_column("id", id.as_u64())?)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete subscription: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: SubscriptionId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRecord> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_SUBSCRIPTION))
                .bind(to_column("id", id.as_u64())?)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to find subscription: {}", e)))?;

        row.map(subscription_from_record).transpose()
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Subscription>, DomainError> {
        let rows: Vec<SubscriptionRecord> =
            sqlx::query_as(&format!("{} WHERE user_id = $1 ORDER BY id", SELECT_SUBSCRIPTION))
                .bind(to_column("user_id", user_id.as_u64())?)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to find subscriptions: {}", e))
                })?;

        rows.into_iter().map(subscription_from_record).collect()
    }

    async fn find_active_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRecord> = sqlx::query_as(&format!(
            "{} WHERE user_id = $1 AND status = 'Active' ORDER BY id LIMIT 1",
            SELECT_SUBSCRIPTION
        ))
        .bind(to_column("user_id", user_id.as_u64())?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find active subscription: {}", e)))?;

        row.map(subscription_from_record).transpose()
    }
}
