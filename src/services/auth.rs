//! Login operations. Use with an anonymous client.

use crate::client::HavenClient;
use crate::envelope::ItemResult;
use crate::errors::HavenResult;
use crate::types::{AccountInfo, AuthLoginInput, RedeemInput, RedeemResponse};

/// Service for login operations.
pub struct AuthService<'a> {
    client: &'a HavenClient,
}

impl<'a> AuthService<'a> {
    /// Creates a new auth service.
    pub fn new(client: &'a HavenClient) -> Self {
        Self { client }
    }

    /// Logs in with username and password.
    pub async fn login(&self, input: &AuthLoginInput) -> HavenResult<ItemResult<AccountInfo>> {
        self.client.post("/auth/login", input).await
    }

    /// Redeems an access code.
    pub async fn verify_access_code(
        &self,
        input: &RedeemInput,
    ) -> HavenResult<ItemResult<RedeemResponse>> {
        self.client.post("/auth/redeem", input).await
    }
}
