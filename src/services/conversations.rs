//! Conversation operations.

use crate::client::HavenClient;
use crate::envelope::{ItemResult, ListResult};
use crate::errors::HavenResult;
use crate::types::{AccountSimple, Conversation};
use serde::Serialize;
use uuid::Uuid;

/// Service for conversation operations.
pub struct ConversationsService<'a> {
    client: &'a HavenClient,
}

impl<'a> ConversationsService<'a> {
    /// Creates a new conversations service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists accounts the current account may start a conversation with.
    pub async fn find_target(
        &self,
        faction_id: Uuid,
        take: u32,
        keyword: &str,
    ) -> HavenResult<ListResult<AccountSimple>> {
        let query = TargetQuery { take, keyword };
        self.client
            .get_with_params(&format!("/conversations/find_target/{}", faction_id), &query)
            .await
    }

    /// Starts a conversation with its opening message.
    ///
    /// The returned conversation may lack avatars and other display details
    /// right after creation.
    pub async fn start(&self, conversation: &Conversation) -> HavenResult<ItemResult<Conversation>> {
        self.client.post("/conversations/start", conversation).await
    }
}

#[derive(Debug, Serialize)]
struct TargetQuery<'k> {
    take: u32,
    keyword: &'k str,
}
