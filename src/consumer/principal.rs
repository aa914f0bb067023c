//! Principal, seat, group and term use cases.

use super::{first_of, SampleConsumer};
use crate::errors::{HavenError, HavenResult};
use crate::types::{
    Group, GroupMemberRole, GroupTarget, GroupTargetKind, Paging, Principal, PrincipalInvite,
    PrincipalRegisterInput, Seat, Term,
};
use chrono::Utc;
use uuid::Uuid;

impl SampleConsumer {
    // Seats

    /// Seats `principal_id` in `term_id` with the first seat type.
    #[tracing::instrument(skip(self))]
    pub async fn principal_seat_add(
        &mut self,
        faction_id: Uuid,
        principal_id: Uuid,
        term_id: Uuid,
    ) -> HavenResult<Seat> {
        let client = self.clients.client_for(Some(faction_id))?;

        let seat_types = client
            .seats()
            .types_by_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let seat_type = first_of(seat_types, "seat type")?;

        let seat = Seat {
            faction_id,
            principal_id: Some(principal_id),
            term_id,
            seat_type_id: seat_type.seat_type_id,
            added_utc: Some(Utc::now()),
            ..Default::default()
        };

        client.seats().create(&seat).await?.into_item()
    }

    /// Removes the principal from a seat, leaving the seat record in place.
    #[tracing::instrument(skip(self))]
    pub async fn principal_seat_remove(&mut self, faction_id: Uuid, seat_id: Uuid) -> HavenResult<bool> {
        let result = self
            .clients
            .client_for(Some(faction_id))?
            .seats()
            .remove(seat_id)
            .await?;
        Ok(result.is_success())
    }

    // Groups

    /// Adds `principal_id` to a group as a writer.
    #[tracing::instrument(skip(self))]
    pub async fn principal_group_add(
        &mut self,
        faction_id: Uuid,
        principal_id: Uuid,
        group_id: Uuid,
    ) -> HavenResult<bool> {
        // per principal; account targets are supported but rarely sensible
        let target = GroupTarget {
            account_id: self.account.account_id,
            group_id,
            principal_id: Some(principal_id),
            kind: GroupTargetKind::Principal,
            role: GroupMemberRole::Writer,
            hidden: false,
            suppress_main: false,
            ..Default::default()
        };

        let result = self
            .clients
            .client_for(Some(faction_id))?
            .groups()
            .upsert_target(&target)
            .await?;
        Ok(result.is_success())
    }

    /// Removes `principal_id` from a group.
    #[tracing::instrument(skip(self))]
    pub async fn principal_group_remove(
        &mut self,
        faction_id: Uuid,
        principal_id: Uuid,
        group_id: Uuid,
    ) -> HavenResult<bool> {
        let client = self.clients.client_for(Some(faction_id))?;

        let targets = client
            .groups()
            .targets_by_group(group_id, Paging::all())
            .await?
            .into_items()?;
        let target = targets
            .into_iter()
            .find(|t| t.principal_id == Some(principal_id))
            .ok_or_else(|| HavenError::not_found("User is not a part of the group"))?;

        let result = client.groups().delete_target(target.group_target_id).await?;
        Ok(result.is_success())
    }

    // Principals

    /// Registers a principal with a seat in `term_id` and invites `email`.
    #[tracing::instrument(skip(self))]
    pub async fn principal_register(
        &mut self,
        faction_id: Uuid,
        term_id: Uuid,
        email: &str,
    ) -> HavenResult<Principal> {
        let client = self.clients.client_for(Some(faction_id))?;

        let seat_types = client
            .seats()
            .types_by_faction(faction_id, Paging::first())
            .await?
            .into_items()?;
        let seat_type = first_of(seat_types, "seat type")?;

        let input = PrincipalRegisterInput {
            invite_emails: vec![email.to_string()],
            seat: Seat {
                faction_id,
                term_id,
                seat_type_id: seat_type.seat_type_id,
                added_utc: Some(Utc::now()),
                ..Default::default()
            },
            principal: sample_principal(faction_id),
        };

        client.principals().register(&input).await?.into_item()
    }

    /// Invites `email` to an existing principal.
    ///
    /// `principal_register` does the principal, seat and invite in one call.
    #[tracing::instrument(skip(self))]
    pub async fn principal_invite(
        &mut self,
        faction_id: Uuid,
        principal_id: Uuid,
        email: &str,
    ) -> HavenResult<bool> {
        let invite = PrincipalInvite {
            faction_id,
            principal_id,
            email: email.to_string(),
            stamp_utc: Some(Utc::now()),
            ..Default::default()
        };

        let result = self
            .clients
            .client_for(Some(faction_id))?
            .principals()
            .create_invite(&invite)
            .await?;
        Ok(result.is_success())
    }

    /// Renames a principal.
    #[tracing::instrument(skip(self))]
    pub async fn principal_edit(
        &mut self,
        faction_id: Uuid,
        principal_id: Uuid,
        new_name: &str,
    ) -> HavenResult<Principal> {
        let client = self.clients.client_for(Some(faction_id))?;

        let mut principal = client.principals().get(principal_id).await?.into_item()?;
        principal.display_name = new_name.to_string();

        client
            .principals()
            .update(principal.principal_id, &principal)
            .await?
            .into_item()
    }

    /// Enables or disables a principal.
    #[tracing::instrument(skip(self))]
    pub async fn principal_change_status(
        &mut self,
        faction_id: Uuid,
        principal_id: Uuid,
        enabled: bool,
    ) -> HavenResult<bool> {
        let result = self
            .clients
            .client_for(Some(faction_id))?
            .principals()
            .change_status(principal_id, enabled)
            .await?;
        Ok(result.is_success())
    }

    /// Gets a principal.
    pub async fn principal_get(&mut self, faction_id: Uuid, principal_id: Uuid) -> HavenResult<Principal> {
        self.clients
            .client_for(Some(faction_id))?
            .principals()
            .get(principal_id)
            .await?
            .into_item()
    }

    /// Gets a principal by its external identifier.
    pub async fn principal_get_by_external_id(
        &mut self,
        faction_id: Uuid,
        external_id: &str,
    ) -> HavenResult<Principal> {
        self.clients
            .client_for(Some(faction_id))?
            .principals()
            .get_by_external_id(faction_id, external_id)
            .await?
            .into_item()
    }

    /// Finds up to ten principals matching `keyword`.
    pub async fn principal_find(&mut self, faction_id: Uuid, keyword: &str) -> HavenResult<Vec<Principal>> {
        self.clients
            .client_for(Some(faction_id))?
            .principals()
            .find_by_faction(faction_id, keyword, Paging::new(0, 10))
            .await?
            .into_items()
    }

    /// Lists groups of a faction.
    pub async fn groups_get(&mut self, faction_id: Uuid, paging: Paging) -> HavenResult<Vec<Group>> {
        self.clients
            .client_for(Some(faction_id))?
            .groups()
            .by_faction(faction_id, paging)
            .await?
            .into_items()
    }

    /// Lists active terms of a faction.
    pub async fn terms_get(&mut self, faction_id: Uuid, paging: Paging) -> HavenResult<Vec<Term>> {
        self.clients
            .client_for(Some(faction_id))?
            .terms()
            .active_by_faction(faction_id, paging)
            .await?
            .into_items()
    }
}

/// Principal registered by `principal_register`.
pub(crate) fn sample_principal(faction_id: Uuid) -> Principal {
    Principal {
        faction_id,
        external_identifier: Some("my-external".to_string()),
        // generated by the server
        access_code: String::new(),
        display_name: "New Principal".to_string(),
        full_name: "New Principal".to_string(),
        enabled: true,
        // for document integrations
        expected_signers: 1,
        // accounts that may join
        limit: 1,
        ..Default::default()
    }
}
