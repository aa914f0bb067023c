//! Group and group membership operations.

use crate::client::HavenClient;
use crate::envelope::{ActionResult, ListResult};
use crate::errors::HavenResult;
use crate::types::{Group, GroupTarget, Paging};
use uuid::Uuid;

/// Service for group operations.
pub struct GroupsService<'a> {
    client: &'a HavenClient,
}

impl<'a> GroupsService<'a> {
    /// Creates a new groups service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists groups of a faction.
    pub async fn by_faction(&self, faction_id: Uuid, paging: Paging) -> HavenResult<ListResult<Group>> {
        self.client
            .get_with_params(&format!("/group/by_faction/{}", faction_id), &paging)
            .await
    }

    /// Adds or updates a group membership.
    pub async fn upsert_target(&self, target: &GroupTarget) -> HavenResult<ActionResult> {
        self.client.post("/grouptargets/upsert", target).await
    }

    /// Lists memberships of a group.
    pub async fn targets_by_group(
        &self,
        group_id: Uuid,
        paging: Paging,
    ) -> HavenResult<ListResult<GroupTarget>> {
        self.client
            .get_with_params(&format!("/grouptarget/by_group/{}", group_id), &paging)
            .await
    }

    /// Deletes a membership.
    pub async fn delete_target(&self, group_target_id: Uuid) -> HavenResult<ActionResult> {
        self.client
            .delete(&format!("/grouptarget/{}", group_target_id))
            .await
    }
}
