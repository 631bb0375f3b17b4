//! In-memory account storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::identity::{Email, UserAccount};
use crate::ports::AccountRepository;

#[derive(Debug, Default)]
struct Store {
    accounts: BTreeMap<UserId, UserAccount>,
    last_id: u64,
}

impl Store {
    fn email_taken(&self, email: &Email, except: UserId) -> bool {
        self.accounts.values().any(|a| {
            a.id() != except && a.email().as_str().eq_ignore_ascii_case(email.as_str())
        })
    }
}

/// Account repository backed by a map. Emails are unique ignoring ASCII case.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_in_use() -> DomainError {
    DomainError::new(ErrorCode::EmailInUse, "email already in use")
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: UserAccount) -> Result<UserAccount, DomainError> {
        let mut store = self.store.write().await;
        if store.email_taken(account.email(), UserId::UNASSIGNED) {
            return Err(email_in_use());
        }
        store.last_id += 1;
        let id = UserId::new(store.last_id);
        let account = account.with_id(id);
        store.accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn update(&self, account: &UserAccount) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        if !store.accounts.contains_key(&account.id()) {
            return Err(DomainError::new(
                ErrorCode::UserNotFound,
                format!("user not found: {}", account.id()),
            ));
        }
        if store.email_taken(account.email(), account.id()) {
            return Err(email_in_use());
        }
        store.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserAccount>, DomainError> {
        Ok(self.store.read().await.accounts.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<UserAccount>, DomainError> {
        Ok(self
            .store
            .read()
            .await
            .accounts
            .values()
            .find(|a| a.email().as_str().eq_ignore_ascii_case(email.as_str()))
            .cloned())
    }
}
