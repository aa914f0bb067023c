//! Term operations.

use crate::client::HavenClient;
use crate::envelope::ListResult;
use crate::errors::HavenResult;
use crate::types::{Paging, Term};
use uuid::Uuid;

/// Service for term operations.
pub struct TermsService<'a> {
    client: &'a HavenClient,
}

impl<'a> TermsService<'a> {
    /// Creates a new terms service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Lists active terms of a faction.
    pub async fn active_by_faction(
        &self,
        faction_id: Uuid,
        paging: Paging,
    ) -> HavenResult<ListResult<Term>> {
        self.client
            .get_with_params(&format!("/terms/active/by_faction/{}", faction_id), &paging)
            .await
    }
}
