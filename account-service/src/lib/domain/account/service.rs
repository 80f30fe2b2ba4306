use std::sync::Arc;

use async_trait::async_trait;
use auth::Claims;
use auth::CredentialHasher;
use auth::PasswordPolicy;
use auth::TokenIssuer;
use chrono::Utc;

use crate::account::errors::AccountError;
use crate::account::ports::AccountServicePort;
use crate::account::ports::AccountStore;
use crate::domain::account::models::AccessToken;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::Credentials;
use crate::domain::account::models::RegisterCommand;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<S>
where
    S: AccountStore,
{
    store: Arc<S>,
    password_hasher: CredentialHasher,
    token_issuer: TokenIssuer,
    token_expiration_hours: i64,
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Account persistence implementation
    /// * `token_issuer` - Access token signer, already configured with its secret
    /// * `token_expiration_hours` - Lifetime of issued tokens
    ///
    /// # Returns
    /// Configured account service instance
    pub fn new(store: Arc<S>, token_issuer: TokenIssuer, token_expiration_hours: i64) -> Self {
        Self {
            store,
            password_hasher: CredentialHasher::new(),
            token_issuer,
            token_expiration_hours,
        }
    }
}

#[async_trait]
impl<S> AccountServicePort for AccountService<S>
where
    S: AccountStore,
{
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError> {
        // Availability first: a taken username is reported even when the
        // password would also have been rejected
        if self
            .store
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AccountError::DuplicateUsername(
                command.username.as_str().to_string(),
            ));
        }

        if !PasswordPolicy::is_valid(&command.password) {
            return Err(AccountError::WeakPassword);
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        // The pre-check is best-effort; the store's uniqueness guarantee
        // decides concurrent duplicates
        self.store.insert_if_absent(account).await
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<AccessToken, AccountError> {
        // Unknown username and wrong password collapse into the same error
        let account = self
            .store
            .find_by_username(&credentials.username)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password_matches = self
            .password_hasher
            .verify(&credentials.password, &account.password_hash)?;

        if !password_matches {
            return Err(AccountError::InvalidCredentials);
        }

        // Claims come from the stored account, not the request
        let claims = Claims::new(
            account.username.as_str(),
            account.email.as_str(),
            self.token_expiration_hours,
        );
        let token = self.token_issuer.issue(&claims)?;

        Ok(AccessToken::new(token))
    }
}
