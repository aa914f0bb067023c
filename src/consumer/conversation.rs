//! Conversation use cases.

use super::SampleConsumer;
use crate::errors::HavenResult;
use crate::types::{AccountSimple, Conversation, Message};
use chrono::Utc;
use uuid::Uuid;

impl SampleConsumer {
    /// Lists up to ten accounts the caller may start a conversation with.
    pub async fn convo_find_target(&mut self, faction_id: Uuid) -> HavenResult<Vec<AccountSimple>> {
        self.clients
            .client_for(Some(faction_id))?
            .conversations()
            .find_target(faction_id, 10, "")
            .await?
            .into_items()
    }

    /// Starts a conversation with `other_account_id`.
    ///
    /// Avatars and other display extras may be missing on the returned
    /// conversation right after creation.
    #[tracing::instrument(skip(self))]
    pub async fn convo_start(
        &mut self,
        faction_id: Uuid,
        other_account_id: Uuid,
    ) -> HavenResult<Conversation> {
        let conversation = Conversation {
            faction_id,
            creator_account_id: self.account.account_id,
            account_list: vec![other_account_id],
            latest_message: Some(Message {
                faction_id,
                account_id: self.account.account_id,
                stamp_utc: Some(Utc::now()),
                text: "Hello party people.".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        self.clients
            .client_for(Some(faction_id))?
            .conversations()
            .start(&conversation)
            .await?
            .into_item()
    }
}
