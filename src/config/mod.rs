//! Configuration types for the Haven client and sample.

use crate::errors::{HavenError, HavenErrorKind, HavenResult};
use crate::types::AccountInfo;
use std::time::Duration;
use uuid::Uuid;

/// Default Haven API base URL.
pub const DEFAULT_BASE_URL: &str = "https://app.socialhaven.com/api/";

/// Default locale; send the faction default when several languages exist.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Default device platform tag.
pub const DEFAULT_DEVICE_PLATFORM: &str = "web";

/// Default device version tag.
pub const DEFAULT_DEVICE_VERSION: &str = "1.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default User-Agent header.
pub const DEFAULT_USER_AGENT: &str = "integrations-haven/0.1.0";

/// Device headers sent on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// `accept-language` value.
    pub locale: String,
    /// `X-DevicePlatform` value.
    pub platform: String,
    /// `X-DeviceVersion` value.
    pub version: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            platform: DEFAULT_DEVICE_PLATFORM.to_string(),
            version: DEFAULT_DEVICE_VERSION.to_string(),
        }
    }
}

/// Haven client configuration.
#[derive(Debug, Clone)]
pub struct HavenConfig {
    /// API base URL.
    pub base_url: String,
    /// Caller identity; usually acquired by logging in.
    pub account: AccountInfo,
    /// Faction the sample scenarios run against.
    pub faction_id: Option<Uuid>,
    /// Device headers.
    pub device: DeviceConfig,
    /// Request timeout.
    pub timeout: Duration,
    /// Connect timeout.
    pub connect_timeout: Duration,
    /// User-Agent header.
    pub user_agent: String,
}

impl Default for HavenConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account: AccountInfo::default(),
            faction_id: None,
            device: DeviceConfig::default(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HavenConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> HavenConfigBuilder {
        HavenConfigBuilder::new()
    }

    /// Loads configuration from environment variables over the defaults.
    ///
    /// Reads `HAVEN_API_URL`, `HAVEN_API_KEY`, `HAVEN_API_SECRET`,
    /// `HAVEN_ACCOUNT_ID`, `HAVEN_FACTION_ID` and `HAVEN_TIMEOUT_SECS`.
    pub fn from_env() -> HavenResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> HavenResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = HavenConfigBuilder::new();

        if let Some(base_url) = lookup("HAVEN_API_URL") {
            builder = builder.base_url(base_url);
        }

        let account_id = match lookup("HAVEN_ACCOUNT_ID") {
            Some(raw) => parse_uuid("HAVEN_ACCOUNT_ID", &raw)?,
            None => Uuid::nil(),
        };
        let api_key = lookup("HAVEN_API_KEY").unwrap_or_default();
        let api_secret = lookup("HAVEN_API_SECRET").unwrap_or_default();
        builder = builder.account(AccountInfo::with_credentials(account_id, api_key, api_secret));

        if let Some(raw) = lookup("HAVEN_FACTION_ID") {
            builder = builder.faction_id(parse_uuid("HAVEN_FACTION_ID", &raw)?);
        }

        if let Some(raw) = lookup("HAVEN_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                HavenError::configuration(format!("HAVEN_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> HavenResult<()> {
        if self.base_url.is_empty() {
            return Err(HavenError::new(
                HavenErrorKind::InvalidBaseUrl,
                "Base URL cannot be empty",
            ));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            HavenError::new(
                HavenErrorKind::InvalidBaseUrl,
                format!("Base URL is not a valid URL: {}", e),
            )
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(HavenError::new(
                HavenErrorKind::InvalidBaseUrl,
                "Base URL must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(HavenError::configuration("Timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Faction the sample runs against; nil when none was configured.
    pub fn sample_faction(&self) -> Uuid {
        self.faction_id.unwrap_or_default()
    }
}

fn parse_uuid(name: &str, raw: &str) -> HavenResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|e| HavenError::configuration(format!("{} is not a UUID: {}", name, e)))
}

/// Builder for HavenConfig.
#[derive(Debug, Default)]
pub struct HavenConfigBuilder {
    base_url: Option<String>,
    account: Option<AccountInfo>,
    faction_id: Option<Uuid>,
    device: Option<DeviceConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl HavenConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the caller identity.
    pub fn account(mut self, account: AccountInfo) -> Self {
        self.account = Some(account);
        self
    }

    /// Sets the sample faction.
    pub fn faction_id(mut self, faction_id: Uuid) -> Self {
        self.faction_id = Some(faction_id);
        self
    }

    /// Sets the device headers.
    pub fn device(mut self, device: DeviceConfig) -> Self {
        self.device = Some(device);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> HavenResult<HavenConfig> {
        let defaults = HavenConfig::default();
        let config = HavenConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            account: self.account.unwrap_or(defaults.account),
            faction_id: self.faction_id.or(defaults.faction_id),
            device: self.device.unwrap_or(defaults.device),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            connect_timeout: self.connect_timeout.unwrap_or(defaults.connect_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
        };

        config.validate()?;
        Ok(config)
    }
}
