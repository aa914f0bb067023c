//! Application key/secret credentials for authenticated calls.

use crate::errors::{HavenError, HavenErrorKind, HavenResult};
use crate::headers::{APPLICATION_KEY, APPLICATION_SECRET};
use crate::types::AccountInfo;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Key/secret pair carried by an authenticated client.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: SecretString,
    api_secret: SecretString,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_secret: SecretString::new(api_secret.into()),
        }
    }

    /// Extracts the credential pair from an account, as returned by login.
    pub fn from_account(account: &AccountInfo) -> HavenResult<Self> {
        match (&account.api_key, &account.api_secret) {
            (Some(key), Some(secret)) => Ok(Self {
                api_key: key.clone(),
                api_secret: secret.clone(),
            }),
            _ => Err(HavenError::new(
                HavenErrorKind::MissingCredentials,
                "Account has no api_key/api_secret pair",
            )),
        }
    }

    /// Masked key for logging.
    pub fn key_hint(&self) -> String {
        let key = self.api_key.expose_secret();
        match key.get(..4) {
            Some(prefix) if key.len() > 8 => format!("{}***", prefix),
            _ => "***".to_string(),
        }
    }

    /// Writes the credential headers into `headers`.
    pub fn apply(&self, headers: &mut HeaderMap) -> HavenResult<()> {
        let key = HeaderValue::from_str(self.api_key.expose_secret())
            .map_err(|_| HavenError::configuration("api_key is not a valid header value"))?;
        let mut secret = HeaderValue::from_str(self.api_secret.expose_secret())
            .map_err(|_| HavenError::configuration("api_secret is not a valid header value"))?;
        secret.set_sensitive(true);

        headers.insert(header_name(APPLICATION_KEY)?, key);
        headers.insert(header_name(APPLICATION_SECRET)?, secret);
        Ok(())
    }
}

// mixed-case names are normalized here; HeaderName::from_static rejects them
fn header_name(name: &str) -> HavenResult<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| HavenError::configuration(format!("Invalid header name '{}': {}", name, e)))
}
