//! Lazily built, cached client handles.

use crate::auth::Credentials;
use crate::client::HavenClient;
use crate::config::HavenConfig;
use crate::errors::{HavenError, HavenErrorKind, HavenResult};
use uuid::Uuid;

/// Builds and caches one anonymous and one authenticated client.
///
/// Handles live as long as the factory. Each lookup sets or clears the
/// tenant header on the cached handle in place, which is why lookups take
/// `&mut self`: a handle is never reconfigured while a call holds it.
pub struct ClientFactory {
    config: HavenConfig,
    credentials: Option<Credentials>,
    anonymous: Option<HavenClient>,
    authenticated: Option<HavenClient>,
}

impl ClientFactory {
    /// Creates a factory; no client is built until first use.
    pub fn new(config: HavenConfig, credentials: Option<Credentials>) -> Self {
        Self {
            config,
            credentials,
            anonymous: None,
            authenticated: None,
        }
    }

    /// Gets the configuration clients are built from.
    pub fn config(&self) -> &HavenConfig {
        &self.config
    }

    /// Replaces the credentials and drops the cached authenticated client.
    pub fn set_credentials(&mut self, credentials: Option<Credentials>) {
        self.credentials = credentials;
        self.authenticated = None;
    }

    /// Returns the handle for `anonymous` mode routed to `faction_id`.
    pub fn get(&mut self, anonymous: bool, faction_id: Option<Uuid>) -> HavenResult<&HavenClient> {
        let slot = if anonymous {
            &mut self.anonymous
        } else {
            &mut self.authenticated
        };

        let client = match slot.take() {
            Some(client) => client,
            None => {
                let credentials = if anonymous {
                    None
                } else {
                    Some(self.credentials.clone().ok_or_else(|| {
                        HavenError::new(
                            HavenErrorKind::MissingCredentials,
                            "Authenticated client requested without credentials",
                        )
                    })?)
                };
                let key = credentials
                    .as_ref()
                    .map(Credentials::key_hint)
                    .unwrap_or_else(|| "-".to_string());
                tracing::debug!(anonymous, key = %key, "Creating Haven client");
                HavenClient::new(&self.config, credentials)?
            }
        };

        let client = slot.insert(client);
        client.set_faction(faction_id);
        Ok(client)
    }

    /// Anonymous handle without tenant routing; for login and registration.
    pub fn anonymous(&mut self) -> HavenResult<&HavenClient> {
        self.get(true, None)
    }

    /// Authenticated handle routed to `faction_id`.
    pub fn client_for(&mut self, faction_id: Option<Uuid>) -> HavenResult<&HavenClient> {
        self.get(false, faction_id)
    }
}
