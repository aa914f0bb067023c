//! Haven API client implementation.

use crate::auth::Credentials;
use crate::config::HavenConfig;
use crate::errors::{HavenError, HavenErrorKind, HavenResult};
use crate::headers::{self, CustomHeaders};
use crate::services::*;
use bytes::Bytes;
use reqwest::{header::USER_AGENT, Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// Haven error response format.
#[derive(Debug, serde::Deserialize)]
struct HavenErrorResponse {
    message: Option<String>,
}

/// Haven API client bound to one header list and, when authenticated, one
/// credential pair.
pub struct HavenClient {
    /// HTTP client.
    http: Client,
    /// Base URL.
    base_url: String,
    /// User-Agent header.
    user_agent: String,
    /// Headers copied onto every request.
    headers: CustomHeaders,
    /// Credentials for authenticated mode.
    credentials: Option<Credentials>,
}

impl HavenClient {
    /// Creates a client with the fixed device headers of `config`.
    ///
    /// Passing `None` for `credentials` creates an anonymous client, which is
    /// only useful for login and registration.
    pub fn new(config: &HavenConfig, credentials: Option<Credentials>) -> HavenResult<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                HavenError::new(
                    HavenErrorKind::InvalidConfiguration,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        let mut custom = CustomHeaders::new();
        custom.add(headers::ACCEPT_LANGUAGE, config.device.locale.as_str());
        custom.add(headers::DEVICE_PLATFORM, config.device.platform.as_str());
        custom.add(headers::DEVICE_VERSION, config.device.version.as_str());

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            headers: custom,
            credentials,
        })
    }

    /// Gets the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns true if the client carries credentials.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> &CustomHeaders {
        &self.headers
    }

    /// Sets or clears the tenant routing header.
    ///
    /// Not required by the server, but lets it route the call efficiently.
    pub fn set_faction(&mut self, faction_id: Option<Uuid>) {
        match faction_id {
            Some(id) => self.headers.replace(headers::FACTION, &id.to_string()),
            None => self.headers.remove(headers::FACTION),
        }
    }

    // Service accessors

    /// Gets the auth service.
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// Gets the accounts service.
    pub fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    /// Gets the factions service.
    pub fn factions(&self) -> FactionsService<'_> {
        FactionsService::new(self)
    }

    /// Gets the feed service.
    pub fn feed(&self) -> FeedService<'_> {
        FeedService::new(self)
    }

    /// Gets the bulletins service.
    pub fn bulletins(&self) -> BulletinsService<'_> {
        BulletinsService::new(self)
    }

    /// Gets the forms service.
    pub fn forms(&self) -> FormsService<'_> {
        FormsService::new(self)
    }

    /// Gets the terms service.
    pub fn terms(&self) -> TermsService<'_> {
        TermsService::new(self)
    }

    /// Gets the groups service.
    pub fn groups(&self) -> GroupsService<'_> {
        GroupsService::new(self)
    }

    /// Gets the conversations service.
    pub fn conversations(&self) -> ConversationsService<'_> {
        ConversationsService::new(self)
    }

    /// Gets the seats service.
    pub fn seats(&self) -> SeatsService<'_> {
        SeatsService::new(self)
    }

    /// Gets the principals service.
    pub fn principals(&self) -> PrincipalsService<'_> {
        PrincipalsService::new(self)
    }

    /// Gets the staff service.
    pub fn staff(&self) -> StaffService<'_> {
        StaffService::new(self)
    }

    // HTTP methods

    /// Makes a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> HavenResult<T> {
        self.request(Method::GET, path, Option::<&()>::None).await
    }

    /// Makes a GET request with query parameters.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize>(
        &self,
        path: &str,
        params: &P,
    ) -> HavenResult<T> {
        let path = with_query(path, params)?;
        self.request(Method::GET, &path, Option::<&()>::None).await
    }

    /// Makes a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> HavenResult<T> {
        self.request(Method::POST, path, Some(body)).await
    }

    /// Makes a PUT request.
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> HavenResult<T> {
        self.request(Method::PUT, path, Some(body)).await
    }

    /// Makes a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> HavenResult<T> {
        self.request(Method::DELETE, path, Option::<&()>::None).await
    }

    /// Makes a GET request and returns the raw body.
    pub async fn get_bytes(&self, path: &str) -> HavenResult<Bytes> {
        let url = self.build_url(path);
        let response = self
            .execute_request(Method::GET, &url, Option::<&()>::None)
            .await?;
        Ok(response.bytes().await?)
    }

    /// Builds the absolute URL for `path`.
    pub fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    // Internal methods

    async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> HavenResult<T> {
        let url = self.build_url(path);
        let response = self.execute_request(method, &url, body).await?;

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            HavenError::deserialization(format!("Failed to deserialize response: {}", e))
                .with_cause(e)
        })
    }

    async fn execute_request<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> HavenResult<Response> {
        let mut header_map = self.headers.to_header_map()?;
        if let Some(credentials) = &self.credentials {
            credentials.apply(&mut header_map)?;
        }

        let mut request = self
            .http
            .request(method.clone(), url)
            .headers(header_map)
            .header(USER_AGENT, &self.user_agent);

        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(
            method = %method,
            url = %url,
            faction = self.headers.get(headers::FACTION).unwrap_or("-"),
            authenticated = self.credentials.is_some(),
            "Sending Haven request"
        );

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                HavenError::timeout(format!("Request timed out: {}", e))
            } else if e.is_connect() {
                HavenError::new(
                    HavenErrorKind::ConnectionFailed,
                    format!("Connection failed: {}", e),
                )
            } else {
                HavenError::new(HavenErrorKind::Unknown, format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "Haven response");

        if !status.is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        Ok(response)
    }

    async fn handle_error_response(response: Response) -> HavenError {
        let status = response.status();

        let message = response
            .json::<HavenErrorResponse>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| format!("HTTP {} error", status.as_u16()));

        HavenError::from_response(status.as_u16(), message)
    }
}

fn with_query<P: Serialize>(path: &str, params: &P) -> HavenResult<String> {
    let query = serde_urlencoded::to_string(params).map_err(|e| {
        HavenError::new(
            HavenErrorKind::InvalidParameter,
            format!("Failed to serialize parameters: {}", e),
        )
    })?;

    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}
