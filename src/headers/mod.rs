//! Ordered custom header list attached to every outbound request.

use crate::errors::{HavenError, HavenErrorKind, HavenResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Locale header.
pub const ACCEPT_LANGUAGE: &str = "accept-language";
/// Device platform header; some responses are shaped by platform.
pub const DEVICE_PLATFORM: &str = "X-DevicePlatform";
/// Device version header; some responses are shaped by version.
pub const DEVICE_VERSION: &str = "X-DeviceVersion";
/// Tenant routing header.
pub const FACTION: &str = "X-Faction";
/// Application key header (authenticated mode).
pub const APPLICATION_KEY: &str = "X-ApplicationKey";
/// Application secret header (authenticated mode).
pub const APPLICATION_SECRET: &str = "X-ApplicationSecret";

/// Ordered list of key/value header pairs.
///
/// Keys compare case-sensitively, matching how the list is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomHeaders {
    entries: Vec<(String, String)>,
}

impl CustomHeaders {
    /// Creates an empty header list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry without checking for an existing key.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Sets `key` to `value`.
    ///
    /// An absent key is appended. A present key with a different value is
    /// removed and the new pair appended at the end. A present key with the
    /// same value leaves the list untouched.
    pub fn replace(&mut self, key: &str, value: &str) {
        if let Some(found) = self.position(key) {
            if self.entries[found].1 == value {
                return;
            }
            self.entries.remove(found);
        }
        self.entries.push((key.to_string(), value.to_string()));
    }

    /// Removes the first entry for `key`; no-op when absent.
    pub fn remove(&mut self, key: &str) {
        if let Some(found) = self.position(key) {
            self.entries.remove(found);
        }
    }

    /// Gets the value of the first entry for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|i| self.entries[i].1.as_str())
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the list into a reqwest header map.
    pub fn to_header_map(&self) -> HavenResult<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                HavenError::new(
                    HavenErrorKind::InvalidParameter,
                    format!("Invalid header name '{}': {}", key, e),
                )
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                HavenError::new(
                    HavenErrorKind::InvalidParameter,
                    format!("Invalid value for header '{}': {}", key, e),
                )
            })?;
            map.append(name, value);
        }
        Ok(map)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}
