pub mod argon2;
pub mod errors;
pub mod policy;

pub use self::argon2::CredentialHasher;
pub use self::errors::PasswordError;
pub use self::policy::PasswordPolicy;
