//! Account operations.

use crate::client::HavenClient;
use crate::envelope::{ItemResult, ListResult};
use crate::errors::HavenResult;
use crate::types::{Account, AccountInfo, Paging};
use serde::Serialize;
use uuid::Uuid;

/// Service for account operations.
pub struct AccountsService<'a> {
    client: &'a HavenClient,
}

impl<'a> AccountsService<'a> {
    /// Creates a new accounts service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Gets the calling account, including fresh credentials and memberships.
    pub async fn get_self(&self) -> HavenResult<ItemResult<AccountInfo>> {
        self.client.get("/accounts/self").await
    }

    /// Gets an account by ID.
    pub async fn get(&self, account_id: Uuid) -> HavenResult<ItemResult<Account>> {
        self.client.get(&format!("/account/{}", account_id)).await
    }

    /// Finds accounts matching a keyword.
    pub async fn find(&self, paging: Paging, keyword: &str) -> HavenResult<ListResult<Account>> {
        let query = KeywordQuery {
            skip: paging.skip,
            take: paging.take,
            keyword,
        };
        self.client.get_with_params("/account/find", &query).await
    }
}

/// Paged keyword search parameters.
#[derive(Debug, Serialize)]
pub(crate) struct KeywordQuery<'k> {
    pub(crate) skip: u32,
    pub(crate) take: u32,
    pub(crate) keyword: &'k str,
}
