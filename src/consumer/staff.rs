//! Staff use cases.

use super::SampleConsumer;
use crate::errors::HavenResult;
use crate::types::{Invite, InviteType, ManagerType};
use uuid::Uuid;

impl SampleConsumer {
    /// Invites `email` as a faction administrator; the code is generated.
    #[tracing::instrument(skip(self))]
    pub async fn staff_invite(&mut self, faction_id: Uuid, email: &str) -> HavenResult<bool> {
        let invite = Invite {
            faction_id,
            email: email.to_string(),
            code: None,
            invite_type: InviteType::Administrator,
            ..Default::default()
        };

        let result = self
            .clients
            .client_for(Some(faction_id))?
            .staff()
            .create_invite(&invite)
            .await?;
        Ok(result.is_success())
    }

    /// Promotes a manager to administrator.
    #[tracing::instrument(skip(self))]
    pub async fn manager_change(&mut self, faction_id: Uuid, manager_id: Uuid) -> HavenResult<bool> {
        let result = self
            .clients
            .client_for(Some(faction_id))?
            .staff()
            .change_manager_type(manager_id, ManagerType::Administrator)
            .await?;
        Ok(result.is_success())
    }
}
