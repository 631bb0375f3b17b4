//! ListPlansHandler - Query handler returning the plan catalogue.

use std::sync::Arc;

use crate::domain::billing::{BillingError, Plan};
use crate::ports::PlanRepository;

#[derive(Debug, Clone, Copy, Default)]
pub struct ListPlansQuery;

#[derive(Debug, Clone)]
pub struct ListPlansResult {
    /// Ordered by id.
    pub plans: Vec<Plan>,
}

pub struct ListPlansHandler {
    plans: Arc<dyn PlanRepository>,
}

impl ListPlansHandler {
    pub fn new(plans: Arc<dyn PlanRepository>) -> Self {
        Self { plans }
    }

    pub async fn handle(&self, _query: ListPlansQuery) -> Result<ListPlansResult, BillingError> {
        let plans = self.plans.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to list plans");
            BillingError::from(e)
        })?;
        Ok(ListPlansResult { plans })
    }
}
