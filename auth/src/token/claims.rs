use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an access token.
///
/// The identity fields come from the stored account, never from the login
/// request. Timestamps follow RFC 7519: `iat` and `exp` are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Account username
    pub username: String,

    /// Account email address
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for an authenticated account.
    ///
    /// # Arguments
    /// * `username` - Account username
    /// * `email` - Account email address
    /// * `expiration_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims with `iat` set to now and `exp` set `expiration_hours` later
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        expiration_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(expiration_hours);

        Self {
            username: username.into(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
