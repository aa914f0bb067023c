//! Staff invite and manager operations.

use crate::client::HavenClient;
use crate::envelope::ActionResult;
use crate::errors::HavenResult;
use crate::types::{Invite, ManagerType};
use uuid::Uuid;

/// Service for staff operations.
pub struct StaffService<'a> {
    client: &'a HavenClient,
}

impl<'a> StaffService<'a> {
    /// Creates a new staff service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Invites an email as staff.
    pub async fn create_invite(&self, invite: &Invite) -> HavenResult<ActionResult> {
        self.client.post("/invite", invite).await
    }

    /// Changes the level of a manager.
    pub async fn change_manager_type(
        &self,
        manager_id: Uuid,
        manager_type: ManagerType,
    ) -> HavenResult<ActionResult> {
        self.client
            .post(
                &format!("/managers/{}/type/{}", manager_id, manager_type.as_str()),
                &(),
            )
            .await
    }
}
