//! Base repository trait for persistence operations.
//!
//! Aggregates arrive at `create` with the `0` sentinel id and leave with the
//! identifier storage assigned. Domain-specific repositories extend this
//! trait with their query methods.
//!
//! # Example
//!
//! ```ignore
//! #[async_trait]
//! pub trait PlanRepository: Repository<Plan, PlanId> {
//!     async fn find_all(&self) -> Result<Vec<Plan>, DomainError>;
//! }
//!
//! pub struct CreatePlanHandler {
//!     plans: Arc<dyn PlanRepository>,
//! }
//! ```

use async_trait::async_trait;
use std::fmt::Debug;

use super::DomainError;

/// Base trait for aggregate repositories.
///
/// # Error Handling
///
/// All methods return `Result<_, DomainError>`. Implementations convert
/// adapter-specific errors (e.g., database errors) into `DomainError`.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync
where
    T: Send + Sync,
    ID: Send + Sync + Debug + 'static,
{
    /// Persists a new aggregate and returns it with its assigned identifier.
    async fn create(&self, entity: T) -> Result<T, DomainError>;

    /// Replaces a stored aggregate.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if nothing is stored under the entity's id.
    async fn update(&self, entity: &T) -> Result<(), DomainError>;

    /// Deletes an aggregate by its identifier.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if nothing is stored under `id`.
    async fn delete(&self, id: ID) -> Result<(), DomainError>;

    /// Finds an aggregate by its identifier.
    ///
    /// Returns `Ok(None)` if the aggregate doesn't exist.
    /// Returns `Err` only for infrastructure failures.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Checks if an aggregate with the given ID exists.
    ///
    /// Default implementation uses `find_by_id`.
    async fn exists(&self, id: ID) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
