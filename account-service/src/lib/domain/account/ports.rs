use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::AccessToken;
use crate::account::models::Account;
use crate::account::models::Credentials;
use crate::account::models::RegisterCommand;
use crate::account::models::Username;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Checks username availability, enforces the password policy, hashes
    /// the password, and persists the account, in that order.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created account entity
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `WeakPassword` - Password does not meet the password policy
    /// * `Internal` - Hashing or store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `credentials` - Username and plaintext password from the login request
    ///
    /// # Returns
    /// Signed access token carrying the account's username and email
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password; the two
    ///   cases are deliberately indistinguishable
    /// * `Internal` - Verification, signing, or store operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<AccessToken, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountStore: Send + Sync + 'static {
    /// Retrieve an account by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional account entity (None if not found)
    ///
    /// # Errors
    /// * `Internal` - Store operation failed
    async fn find_by_username(&self, username: &Username)
        -> Result<Option<Account>, AccountError>;

    /// Persist a new account unless the username is already taken.
    ///
    /// The check and the write are atomic with respect to other inserts,
    /// so concurrent registrations of the same username admit one winner.
    ///
    /// # Arguments
    /// * `account` - Account entity to persist
    ///
    /// # Returns
    /// Persisted account entity
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `Internal` - Store operation failed
    async fn insert_if_absent(&self, account: Account) -> Result<Account, AccountError>;
}
