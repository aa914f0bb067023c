//! Bulletin operations.

use crate::client::HavenClient;
use crate::envelope::{ItemResult, ListResult};
use crate::errors::HavenResult;
use crate::types::{Bulletin, BulletinCategory, Paging};
use uuid::Uuid;

/// Service for bulletin operations.
pub struct BulletinsService<'a> {
    client: &'a HavenClient,
}

impl<'a> BulletinsService<'a> {
    /// Creates a new bulletins service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists bulletin categories of a faction.
    pub async fn categories_for_faction(
        &self,
        faction_id: Uuid,
        paging: Paging,
    ) -> HavenResult<ListResult<BulletinCategory>> {
        self.client
            .get_with_params(
                &format!("/bulletincategories/by_faction/{}", faction_id),
                &paging,
            )
            .await
    }

    /// Creates a bulletin.
    pub async fn create(&self, bulletin: &Bulletin) -> HavenResult<ItemResult<Bulletin>> {
        self.client.post("/bulletin", bulletin).await
    }

    /// Gets a bulletin.
    pub async fn get(&self, bulletin_id: Uuid) -> HavenResult<ItemResult<Bulletin>> {
        self.client.get(&format!("/bulletin/{}", bulletin_id)).await
    }

    /// Replaces a bulletin.
    pub async fn update(
        &self,
        bulletin_id: Uuid,
        bulletin: &Bulletin,
    ) -> HavenResult<ItemResult<Bulletin>> {
        self.client
            .put(&format!("/bulletin/{}", bulletin_id), bulletin)
            .await
    }
}
