//! Push notification use cases.

use super::SampleConsumer;
use crate::errors::HavenResult;
use crate::types::GenericPushInput;
use uuid::Uuid;

impl SampleConsumer {
    /// Sends a welcome push to one account.
    #[tracing::instrument(skip(self))]
    pub async fn push_send_generic(&mut self, faction_id: Uuid, account_id: Uuid) -> HavenResult<bool> {
        let input = GenericPushInput {
            message: "Welcome to Social Haven".to_string(),
            account_ids: vec![account_id],
        };

        let result = self
            .clients
            .client_for(Some(faction_id))?
            .factions()
            .send_generic_push(faction_id, &input)
            .await?;
        Ok(result.is_success())
    }
}
