//! Credential utilities library
//!
//! Provides the credential handling an account service needs:
//! - Password policy enforcement
//! - Password hashing (Argon2id) and verification
//! - Signed access token issuance and verification
//!
//! The service defines its own flows and adapts these implementations.
//! Nothing in here touches storage or transport.
//!
//! # Examples
//!
//! ## Password Policy
//! ```
//! use auth::PasswordPolicy;
//!
//! assert!(PasswordPolicy::is_valid("abc123"));
//! assert!(!PasswordPolicy::is_valid("letters"));
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//! let hash = hasher.hash("abc123").unwrap();
//! let is_valid = hasher.verify("abc123", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{Claims, TokenIssuer};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::new("alice", "alice@example.com", 24);
//! let token = issuer.issue(&claims).unwrap();
//! let decoded = issuer.verify(&token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::CredentialHasher;
pub use password::PasswordError;
pub use password::PasswordPolicy;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
