//! Feed items.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Entry in a faction feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedItem {
    /// Feed item ID.
    pub feed_item_id: Uuid,
    /// Faction ID.
    pub faction_id: Uuid,
    /// Post shown by this item.
    pub post: Option<Post>,
}

/// Post content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Post ID.
    pub post_id: Uuid,
    /// Body text.
    pub body: Option<String>,
}
