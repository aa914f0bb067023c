//! Feed operations.

use crate::client::HavenClient;
use crate::envelope::ListResult;
use crate::errors::HavenResult;
use crate::types::{FeedItem, Paging};
use uuid::Uuid;

/// Service for feed operations.
pub struct FeedService<'a> {
    client: &'a HavenClient,
}

impl<'a> FeedService<'a> {
    /// Creates a new feed service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists raw feed items of a faction, without visibility rules applied.
    pub async fn by_faction(
        &self,
        faction_id: Uuid,
        paging: Paging,
    ) -> HavenResult<ListResult<FeedItem>> {
        self.client
            .get_with_params(&format!("/feeditem/by_faction/{}", faction_id), &paging)
            .await
    }

    /// Lists the feed items the current account can see.
    pub async fn for_account(
        &self,
        faction_id: Uuid,
        paging: Paging,
    ) -> HavenResult<ListResult<FeedItem>> {
        self.client
            .get_with_params(&format!("/feeditems/for_account/{}", faction_id), &paging)
            .await
    }
}
