//! Principal and principal invite operations.

use crate::client::HavenClient;
use crate::envelope::{ActionResult, ItemResult, ListResult};
use crate::errors::HavenResult;
use crate::services::accounts::KeywordQuery;
use crate::types::{Paging, Principal, PrincipalInvite, PrincipalRegisterInput};
use serde::Serialize;
use uuid::Uuid;

/// Service for principal operations.
pub struct PrincipalsService<'a> {
    client: &'a HavenClient,
}

impl<'a> PrincipalsService<'a> {
    /// Creates a new principals service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Registers a principal together with its seat and invites.
    pub async fn register(
        &self,
        input: &PrincipalRegisterInput,
    ) -> HavenResult<ItemResult<Principal>> {
        self.client.post("/principals/register", input).await
    }

    /// Invites an email to join an existing principal.
    pub async fn create_invite(&self, invite: &PrincipalInvite) -> HavenResult<ActionResult> {
        self.client.post("/principalinvite", invite).await
    }

    /// Gets a principal.
    pub async fn get(&self, principal_id: Uuid) -> HavenResult<ItemResult<Principal>> {
        self.client.get(&format!("/principal/{}", principal_id)).await
    }

    /// Replaces a principal.
    pub async fn update(
        &self,
        principal_id: Uuid,
        principal: &Principal,
    ) -> HavenResult<ItemResult<Principal>> {
        self.client
            .put(&format!("/principal/{}", principal_id), principal)
            .await
    }

    /// Enables or disables a principal.
    pub async fn change_status(&self, principal_id: Uuid, enabled: bool) -> HavenResult<ActionResult> {
        self.client
            .post(
                &format!("/principals/{}/status", principal_id),
                &StatusBody { enabled },
            )
            .await
    }

    /// Gets a principal by external identifier.
    pub async fn get_by_external_id(
        &self,
        faction_id: Uuid,
        external_id: &str,
    ) -> HavenResult<ItemResult<Principal>> {
        self.client
            .get_with_params(
                &format!("/principals/by_external/{}", faction_id),
                &ExternalQuery { external_id },
            )
            .await
    }

    /// Finds principals of a faction matching a keyword.
    pub async fn find_by_faction(
        &self,
        faction_id: Uuid,
        keyword: &str,
        paging: Paging,
    ) -> HavenResult<ListResult<Principal>> {
        let query = KeywordQuery {
            skip: paging.skip,
            take: paging.take,
            keyword,
        };
        self.client
            .get_with_params(&format!("/principals/find/{}", faction_id), &query)
            .await
    }
}

#[derive(Debug, Serialize)]
struct StatusBody {
    enabled: bool,
}

#[derive(Debug, Serialize)]
struct ExternalQuery<'e> {
    external_id: &'e str,
}
