//! Faction-level operations.

use crate::client::HavenClient;
use crate::envelope::{ActionResult, ItemResult};
use crate::errors::HavenResult;
use crate::types::{GenericPushInput, LoginTokenInput};
use uuid::Uuid;

/// Service for faction operations.
pub struct FactionsService<'a> {
    client: &'a HavenClient,
}

impl<'a> FactionsService<'a> {
    /// Creates a new factions service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Generates a short-lived login token for an account.
    pub async fn generate_login_token(
        &self,
        faction_id: Uuid,
        input: &LoginTokenInput,
    ) -> HavenResult<ItemResult<String>> {
        self.client
            .post(&format!("/factions/{}/login_token", faction_id), input)
            .await
    }

    /// Sends a plain push notification.
    pub async fn send_generic_push(
        &self,
        faction_id: Uuid,
        input: &GenericPushInput,
    ) -> HavenResult<ActionResult> {
        self.client
            .post(&format!("/factions/{}/push", faction_id), input)
            .await
    }
}
