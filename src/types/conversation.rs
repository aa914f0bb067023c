//! Conversations and push notifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversation between accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    /// Conversation ID, assigned by the server.
    pub conversation_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Starting account; admins may start on behalf of others.
    pub creator_account_id: Uuid,
    /// Other participants.
    pub account_list: Vec<Uuid>,
    /// Opening or most recent message.
    pub latest_message: Option<Message>,
}

/// Conversation message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Message ID, assigned by the server.
    pub message_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Author.
    pub account_id: Uuid,
    /// Sent time.
    pub stamp_utc: Option<DateTime<Utc>>,
    /// Body.
    pub text: String,
}

/// Plain push notification to a list of accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenericPushInput {
    /// Notification text.
    pub message: String,
    /// Recipients.
    pub account_ids: Vec<Uuid>,
}
