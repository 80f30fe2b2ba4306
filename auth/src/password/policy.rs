/// Password acceptance policy applied at registration.
///
/// A password is accepted when it:
/// - is at least [`PasswordPolicy::MIN_LENGTH`] characters long
/// - consists only of ASCII letters and digits
/// - contains at least one letter and at least one digit
///
/// The policy is a pure predicate; callers decide how a rejection is reported.
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Minimum accepted password length.
    pub const MIN_LENGTH: usize = 6;

    /// Check a candidate password against the policy.
    pub fn is_valid(password: &str) -> bool {
        password.len() >= Self::MIN_LENGTH
            && password.chars().all(|c| c.is_ascii_alphanumeric())
            && password.chars().any(|c| c.is_ascii_alphabetic())
            && password.chars().any(|c| c.is_ascii_digit())
    }
}
