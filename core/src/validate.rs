//! Client-side form validation helpers.
//!
//! Pure functions with no I/O and no shared state. The email check is a
//! shallow shape test (one `@`, no whitespace, a dot somewhere in the domain
//! part), deliberately far short of RFC 5322 — the server stays the
//! authority; these exist to catch typos before a round-trip.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// True when a value is empty in the form-handling sense: null, a string that
/// is blank after trimming, or an empty array. Everything else — numbers,
/// booleans, objects — counts as present.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Shallow email shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Criteria applied by [`is_valid_password`]. The default asks for eight
/// characters and nothing else.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_number: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: false,
            require_number: false,
        }
    }
}

/// Check a password against a policy. Length is counted in characters;
/// the uppercase and digit classes are ASCII.
pub fn is_valid_password(password: &str, policy: &PasswordPolicy) -> bool {
    if password.chars().count() < policy.min_length {
        return false;
    }
    if policy.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        return false;
    }
    if policy.require_number && !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    true
}

/// True when the confirmation field repeats the password exactly.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
