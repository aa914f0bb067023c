//! Account use cases.

use super::SampleConsumer;
use crate::errors::HavenResult;
use crate::types::{Account, LoginTokenInput, Paging};
use uuid::Uuid;

/// Lifetime of generated login tokens.
const LOGIN_TOKEN_MINUTES: u32 = 5;

impl SampleConsumer {
    /// Creates a short-lived login token for `account_id`.
    pub async fn account_create_login_token(
        &mut self,
        faction_id: Uuid,
        account_id: Uuid,
    ) -> HavenResult<String> {
        let input = LoginTokenInput {
            account_id,
            expire_minutes: LOGIN_TOKEN_MINUTES,
        };
        self.clients
            .client_for(Some(faction_id))?
            .factions()
            .generate_login_token(faction_id, &input)
            .await?
            .into_item()
    }

    /// Gets an account.
    pub async fn account_get(&mut self, faction_id: Uuid, account_id: Uuid) -> HavenResult<Account> {
        self.clients
            .client_for(Some(faction_id))?
            .accounts()
            .get(account_id)
            .await?
            .into_item()
    }

    /// Finds up to ten accounts matching `keyword`.
    pub async fn account_find(&mut self, faction_id: Uuid, keyword: &str) -> HavenResult<Vec<Account>> {
        self.clients
            .client_for(Some(faction_id))?
            .accounts()
            .find(Paging::new(0, 10), keyword)
            .await?
            .into_items()
    }
}
