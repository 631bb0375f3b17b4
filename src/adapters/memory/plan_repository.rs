//! In-memory plan storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::billing::Plan;
use crate::domain::foundation::{DomainError, ErrorCode, PlanId, Repository};
use crate::ports::PlanRepository;

#[derive(Debug, Default)]
struct Store {
    plans: BTreeMap<PlanId, Plan>,
    last_id: u64,
}

/// Plan repository backed by a map, for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored plans.
    pub async fn len(&self) -> usize {
        self.store.read().await.plans.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn not_found(id: PlanId) -> DomainError {
    DomainError::new(ErrorCode::PlanNotFound, format!("plan not found: {}", id))
}

#[async_trait]
impl Repository<Plan, PlanId> for InMemoryPlanRepository {
    async fn create(&self, plan: Plan) -> Result<Plan, DomainError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = PlanId::new(store.last_id);
        let plan = plan.with_id(id);
        store.plans.insert(id, plan.clone());
        Ok(plan)
    }

    async fn update(&self, plan: &Plan) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        match store.plans.get_mut(&plan.id()) {
            Some(slot) => {
                *slot = plan.clone();
                Ok(())
            }
            None => Err(not_found(plan.id())),
        }
    }

    async fn delete(&self, id: PlanId) -> Result<(), DomainError> {
        self.store
            .write()
            .await
            .plans
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn find_by_id(&self, id: PlanId) -> Result<Option<Plan>, DomainError> {
        Ok(self.store.read().await.plans.get(&id).cloned())
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn find_all(&self) -> Result<Vec<Plan>, DomainError> {
        Ok(self.store.read().await.plans.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::PlanInput;

    fn plan(name: &str) -> Plan {
        Plan::create(PlanInput {
            name,
            description: None,
            amount_cents: 1999,
            currency: "USD",
            trial_period_days: None,
            interval: "Month",
        })
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let repo = InMemoryPlanRepository::new();

        let first = repo.create(plan("Basic")).await.unwrap();
        let second = repo.create(plan("Pro")).await.unwrap();

        assert_eq!(first.id(), PlanId::new(1));
        assert_eq!(second.id(), PlanId::new(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn find_all_returns_plans_in_id_order() {
        let repo = InMemoryPlanRepository::new();
        repo.create(plan("Basic")).await.unwrap();
        repo.create(plan("Pro")).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.name().as_str().to_string())
            .collect();

        assert_eq!(names, vec!["Basic", "Pro"]);
    }

    #[tokio::test]
    async fn update_unknown_plan_is_not_found() {
        let repo = InMemoryPlanRepository::new();
        let orphan = plan("Basic").with_id(PlanId::new(9));

        let err = repo.update(&orphan).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::PlanNotFound);
    }

    #[tokio::test]
    async fn delete_removes_plan() {
        let repo = InMemoryPlanRepository::new();
        let stored = repo.create(plan("Basic")).await.unwrap();

        repo.delete(stored.id()).await.unwrap();

        assert!(!repo.exists(stored.id()).await.unwrap());
        assert_eq!(
            repo.delete(stored.id()).await.unwrap_err().code,
            ErrorCode::PlanNotFound
        );
    }
}
