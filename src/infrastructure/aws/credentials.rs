//! Credential check
//!
//! Publishing and uploading require all three variables. Nothing else in the
//! AWS credential chain is consulted.

use std::fmt;

use crate::error::PublishError;

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Variables checked, in reporting order
pub const REQUIRED_VARS: [&str; 3] = [ACCESS_KEY_ID_VAR, SECRET_ACCESS_KEY_VAR, SESSION_TOKEN_VAR];

/// Static credentials read from the environment
#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl AwsCredentials {
    /// Read credentials from the process environment.
    ///
    /// Fails with every missing or empty variable listed.
    pub fn from_env() -> Result<Self, PublishError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(get_env: F) -> Result<Self, PublishError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = missing_credentials(&get_env);
        if !missing.is_empty() {
            return Err(PublishError::MissingCredentials { missing });
        }

        let read = |name: &str| get_env(name).unwrap_or_default();
        Ok(Self {
            access_key_id: read(ACCESS_KEY_ID_VAR),
            secret_access_key: read(SECRET_ACCESS_KEY_VAR),
            session_token: read(SESSION_TOKEN_VAR),
        })
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &"<redacted>")
            .finish()
    }
}

/// Names of required variables that are unset or empty
pub fn missing_credentials<F>(get_env: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARS
        .into_iter()
        .filter(|&name| get_env(name).map_or(true, |value| value.is_empty()))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn all_present() {
        let creds = AwsCredentials::from_lookup(env(&[
            (ACCESS_KEY_ID_VAR, "AKIA"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (SESSION_TOKEN_VAR, "token"),
        ]))
        .unwrap();

        assert_eq!(creds.access_key_id, "AKIA");
        assert_eq!(creds.session_token, "token");
    }

    #[test]
    fn reports_each_missing_variable_in_order() {
        let missing = missing_credentials(env(&[(SECRET_ACCESS_KEY_VAR, "secret")]));
        assert_eq!(missing, vec![ACCESS_KEY_ID_VAR, SESSION_TOKEN_VAR]);
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = AwsCredentials::from_lookup(env(&[
            (ACCESS_KEY_ID_VAR, "AKIA"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (SESSION_TOKEN_VAR, ""),
        ]))
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "missing required AWS credentials:\n- AWS_SESSION_TOKEN"
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = AwsCredentials {
            access_key_id: "AKIA".to_string(),
            secret_access_key: "hunter2".to_string(),
            session_token: "sess-123".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("AKIA"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("sess-123"));
    }
}
