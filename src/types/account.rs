//! Accounts, faction membership and login payloads.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The caller's identity as returned by login or `accounts/self`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    /// Account ID.
    pub account_id: Uuid,
    /// Email address.
    pub email: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Application key used for authenticated calls.
    pub api_key: Option<SecretString>,
    /// Application secret used for authenticated calls.
    pub api_secret: Option<SecretString>,
    /// Factions this account is a member of.
    pub factions_member: Vec<FactionPublic>,
}

impl AccountInfo {
    /// Builds an identity from known credentials, as a developer would paste
    /// them into the sample.
    pub fn with_credentials(
        account_id: Uuid,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            account_id,
            api_key: Some(SecretString::new(api_key.into())),
            api_secret: Some(SecretString::new(api_secret.into())),
            ..Default::default()
        }
    }

    /// Membership record for `faction_id`, if any.
    pub fn membership(&self, faction_id: Uuid) -> Option<&FactionPublic> {
        self.factions_member.iter().find(|f| f.faction_id == faction_id)
    }

    /// First principal this account manages in any faction.
    pub fn first_principal_id(&self) -> Option<Uuid> {
        self.factions_member.iter().find_map(|f| f.principal_id)
    }
}

/// Public view of a faction the account belongs to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactionPublic {
    /// Faction ID.
    pub faction_id: Uuid,
    /// Faction name.
    pub name: Option<String>,
    /// Membership ID inside the faction.
    pub member_id: Option<Uuid>,
    /// Principal the membership is attached to.
    pub principal_id: Option<Uuid>,
}

/// Account record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Account ID.
    pub account_id: Uuid,
    /// Email address.
    pub email: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Whether the account is enabled.
    pub enabled: bool,
}

/// Minimal account used for conversation targeting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSimple {
    /// Account ID.
    pub account_id: Uuid,
    /// Display name.
    pub display_name: Option<String>,
    /// Avatar URL.
    pub avatar_url: Option<String>,
}

/// Username/password login body.
#[derive(Clone, Serialize)]
pub struct AuthLoginInput {
    /// Username or email.
    pub user: String,
    /// Password.
    pub password: String,
}

impl fmt::Debug for AuthLoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthLoginInput")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Access code redemption body.
#[derive(Debug, Clone, Serialize)]
pub struct RedeemInput {
    /// Access code.
    pub code: String,
}

/// Screen the client should show after redeeming an access code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RedeemScreen {
    /// The code logged the account in directly.
    AutoLogin,
    /// The account must log in.
    Login,
    /// The account must register.
    Register,
    /// Any other screen.
    #[default]
    #[serde(other)]
    Other,
}

/// Access code redemption result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RedeemResponse {
    /// Next screen.
    pub next_screen: RedeemScreen,
    /// Account info, present for auto-login.
    pub account_info: Option<AccountInfo>,
}

/// Request for a short-lived login token on behalf of an account.
#[derive(Debug, Clone, Serialize)]
pub struct LoginTokenInput {
    /// Account the token logs in as.
    pub account_id: Uuid,
    /// Token lifetime in minutes.
    pub expire_minutes: u32,
}
