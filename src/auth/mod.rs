pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use serde::Deserialize;

pub use extractors::{AdminUser, CurrentUser};
pub use middleware::AuthGate;
pub use password::PasswordHasher;
pub use token::{Claims, TokenService};

/// Credentials payload shared by registration and login.
///
/// Absent fields deserialize to the empty string; presence checks are part of
/// the account rules, not the wire format, so `{"username": "x"}` is a
/// well-formed body that fails registration with a validation error rather
/// than a parse error.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_credential_fields_parse_as_empty() {
        let creds: Credentials = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "");

        let empty: Credentials = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.username, "");
        assert_eq!(empty.password, "");
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let creds: Credentials =
            serde_json::from_str(r#"{"username": "alice", "password": "pw", "role": "admin"}"#)
                .unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "pw");
    }
}
