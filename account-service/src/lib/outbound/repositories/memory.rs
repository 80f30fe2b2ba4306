use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountStore;

/// In-memory account store keyed by username.
///
/// The map lives behind a single mutex, so the occupancy check and the
/// write in [`AccountStore::insert_if_absent`] happen under one lock and
/// concurrent registrations of the same username admit one winner.
pub struct InMemoryAccountStore {
    accounts: Mutex<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        let accounts = self
            .accounts
            .lock()
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        Ok(accounts.get(username.as_str()).cloned())
    }

    async fn insert_if_absent(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self
            .accounts
            .lock()
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        match accounts.entry(account.username.as_str().to_string()) {
            Entry::Occupied(_) => Err(AccountError::DuplicateUsername(
                account.username.as_str().to_string(),
            )),
            Entry::Vacant(entry) => {
                entry.insert(account.clone());
                Ok(account)
            }
        }
    }
}
