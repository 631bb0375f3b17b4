//! Plan repository port.
//!
//! # Example
//!
//! ```ignore
//! let plan = Plan::create(input)?;
//! let stored = plans.create(plan).await?;
//! assert!(stored.id().is_persisted());
//! ```

use async_trait::async_trait;

use crate::domain::billing::Plan;
use crate::domain::foundation::{DomainError, PlanId, Repository};

/// Persistence for plans.
///
/// `update` and `delete` on a missing id fail with `PLAN_NOT_FOUND`.
#[async_trait]
pub trait PlanRepository: Repository<Plan, PlanId> {
    /// Every stored plan, ordered by id.
    async fn find_all(&self) -> Result<Vec<Plan>, DomainError>;
}
