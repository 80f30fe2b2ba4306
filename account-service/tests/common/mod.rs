use std::sync::Arc;

use account_service::domain::account::errors::AccountError;
use account_service::domain::account::models::Account;
use account_service::domain::account::models::Username;
use account_service::domain::account::ports::AccountStore;
use account_service::domain::account::service::AccountService;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::InMemoryAccountStore;
use async_trait::async_trait;
use auth::TokenIssuer;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-token-signing-at-least-32-bytes";

/// Test application that spawns a real server over the in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryAccountStore::new())).await
    }

    /// Spawn the application with a caller-provided store implementation
    pub async fn spawn_with_store<S: AccountStore>(store: Arc<S>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_issuer =
            TokenIssuer::new(TEST_SECRET).expect("Failed to create token issuer for tests");
        let account_service = Arc::new(AccountService::new(store, token_issuer, 24));

        let router = create_router(account_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(TEST_SECRET)
                .expect("Failed to create token issuer for tests"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

/// Store whose operations always fail, for exercising the internal error path
pub struct FailingAccountStore;

#[async_trait]
impl AccountStore for FailingAccountStore {
    async fn find_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        Err(AccountError::Internal(
            "connection refused (os error 111)".to_string(),
        ))
    }

    async fn insert_if_absent(&self, _account: Account) -> Result<Account, AccountError> {
        Err(AccountError::Internal(
            "connection refused (os error 111)".to_string(),
        ))
    }
}
