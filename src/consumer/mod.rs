//! Sample use cases built on the Haven client.
//!
//! Every operation is a straight script: look up the identifiers it needs,
//! build a payload with demonstration values, submit it and return the
//! result. Calls are routed to the faction they concern through the
//! `X-Faction` header.

mod account;
mod answers;
mod bulletin;
mod conversation;
mod factory;
mod form;
mod principal;
mod push;
mod staff;

pub use answers::canned_answer;
pub use factory::ClientFactory;
pub use form::FormAnswers;

use crate::auth::Credentials;
use crate::client::HavenClient;
use crate::config::HavenConfig;
use crate::envelope::ItemResult;
use crate::errors::{HavenError, HavenResult};
use crate::types::{AccountInfo, AuthLoginInput, FeedItem, Paging, RedeemInput, RedeemScreen};
use uuid::Uuid;

/// Runs the sample use cases as one caller identity.
pub struct SampleConsumer {
    account: AccountInfo,
    clients: ClientFactory,
}

impl SampleConsumer {
    /// Creates a consumer acting as `account`.
    pub fn new(config: HavenConfig, account: AccountInfo) -> Self {
        let credentials = Credentials::from_account(&account).ok();
        Self {
            account,
            clients: ClientFactory::new(config, credentials),
        }
    }

    /// Creates a consumer acting as the identity in `config`.
    pub fn from_config(config: HavenConfig) -> Self {
        let account = config.account.clone();
        Self::new(config, account)
    }

    /// Gets the current identity.
    pub fn account(&self) -> &AccountInfo {
        &self.account
    }

    /// Gets the client factory.
    pub fn clients(&mut self) -> &mut ClientFactory {
        &mut self.clients
    }

    /// Returns the cached handle for `anonymous` mode routed to `faction_id`.
    pub fn client(&mut self, anonymous: bool, faction_id: Option<Uuid>) -> HavenResult<&HavenClient> {
        self.clients.get(anonymous, faction_id)
    }

    /// Anonymous handle without tenant routing.
    pub fn anonymous_client(&mut self) -> HavenResult<&HavenClient> {
        self.clients.anonymous()
    }

    /// Authenticated handle routed to `faction_id`.
    pub fn client_for(&mut self, faction_id: Option<Uuid>) -> HavenResult<&HavenClient> {
        self.clients.client_for(faction_id)
    }

    fn replace_account(&mut self, account: AccountInfo) {
        self.clients
            .set_credentials(Credentials::from_account(&account).ok());
        self.account = account;
    }

    // Login

    /// Logs in with username and password and adopts the returned identity.
    pub async fn login(&mut self, user: &str, password: &str) -> HavenResult<Option<AccountInfo>> {
        let input = AuthLoginInput {
            user: user.to_string(),
            password: password.to_string(),
        };
        let result = self
            .clients
            .anonymous()?
            .auth()
            .login(&input)
            .await?
            .demo_unpack();

        if let Some(account) = &result {
            tracing::info!(account_id = %account.account_id, "Logged in");
            self.replace_account(account.clone());
        }
        Ok(result)
    }

    /// Redeems an access code; adopts the identity when it auto-logs in.
    pub async fn login_auto(&mut self, code: &str) -> HavenResult<AccountInfo> {
        let input = RedeemInput {
            code: code.to_string(),
        };
        let response = self
            .clients
            .anonymous()?
            .auth()
            .verify_access_code(&input)
            .await?
            .into_item()?;

        if response.next_screen == RedeemScreen::AutoLogin {
            if let Some(account) = response.account_info {
                self.replace_account(account);
            }
        }
        Ok(self.account.clone())
    }

    // Self

    /// Gets the calling account in its envelope.
    pub async fn get_self(&mut self) -> HavenResult<ItemResult<AccountInfo>> {
        self.clients.client_for(None)?.accounts().get_self().await
    }

    /// Gets the calling account, or `None` when the call reports failure.
    ///
    /// Transport errors still propagate; only the envelope is unwrapped.
    pub async fn get_self_unwrapped(&mut self) -> HavenResult<Option<AccountInfo>> {
        let response = self.clients.client_for(None)?.accounts().get_self().await?;
        Ok(response.demo_unpack())
    }

    // Naming convention

    /// Shows the singular/plural service split on the feed.
    ///
    /// The faction feed lists every item without visibility rules, which
    /// suits admin tooling. The account feed lists only what the current
    /// account can see; its first item is returned. Only the account feed
    /// can fail the call, since non-admin callers are refused the faction
    /// feed.
    pub async fn demonstrate_pattern(&mut self, faction_id: Uuid) -> HavenResult<Option<FeedItem>> {
        let client = self.clients.client_for(Some(faction_id))?;

        let raw = client
            .feed()
            .by_faction(faction_id, Paging::new(0, 10))
            .await?
            .demo_unpack();
        tracing::debug!(count = raw.len(), "Faction feed");

        let visible = client
            .feed()
            .for_account(faction_id, Paging::new(0, 10))
            .await?
            .into_items()?;

        Ok(visible.into_iter().next())
    }
}

/// First item of a lookup, or a not-found error naming `what`.
pub(crate) fn first_of<T>(items: Vec<T>, what: &str) -> HavenResult<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| HavenError::not_found(format!("No {} available", what)))
}

/// Last item of a lookup, or a not-found error naming `what`.
pub(crate) fn last_of<T>(items: Vec<T>, what: &str) -> HavenResult<T> {
    items
        .into_iter()
        .last()
        .ok_or_else(|| HavenError::not_found(format!("No {} available", what)))
}

/// Timestamp text used when a sample retitles a record.
pub(crate) fn updated_title(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("I was updated at {}", now.format("%Y-%m-%d %H:%M:%S UTC"))
}
