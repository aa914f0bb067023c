//! Response envelopes and the helpers that unwrap them.
//!
//! Every call answers with an envelope carrying a success flag and either a
//! single item, a list of items, or nothing. Two ways out are offered:
//!
//! - `into_item` / `into_items` / `into_result` keep the failure as a
//!   [`HavenError`] so callers can tell "empty" from "failed".
//! - `demo_unpack` collapses a failure into `None` or an empty list and
//!   discards the reason. It exists for quick demonstrations only; do not
//!   use it in production code.

use crate::errors::{HavenError, HavenResult};
use serde::{Deserialize, Serialize};

/// Envelope for a single item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResult<T> {
    /// Success flag.
    #[serde(default)]
    pub success: bool,
    /// Payload.
    #[serde(default = "Option::default")]
    pub item: Option<T>,
    /// Server message, usually set on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for a list of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    /// Success flag.
    #[serde(default)]
    pub success: bool,
    /// Payload.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Server message, usually set on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Envelope for a call without a payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResult {
    /// Success flag.
    #[serde(default)]
    pub success: bool,
    /// Server message, usually set on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn failure(message: Option<String>) -> HavenError {
    HavenError::request_failed(message.unwrap_or_else(|| "Request reported failure".to_string()))
}

impl<T> ItemResult<T> {
    /// Successful envelope.
    pub fn ok(item: T) -> Self {
        Self {
            success: true,
            item: Some(item),
            message: None,
        }
    }

    /// Failed envelope.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            item: None,
            message: Some(message.into()),
        }
    }

    /// Returns true if the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the item, or an error carrying the server message.
    ///
    /// A successful envelope without an item is reported as not found.
    pub fn into_item(self) -> HavenResult<T> {
        if !self.success {
            return Err(failure(self.message));
        }
        self.item
            .ok_or_else(|| HavenError::not_found("Response carried no item"))
    }

    /// Returns the item on success, `None` otherwise.
    ///
    /// Discards the failure reason; demonstration use only.
    pub fn demo_unpack(self) -> Option<T> {
        if self.success {
            self.item
        } else {
            None
        }
    }
}

impl<T> ListResult<T> {
    /// Successful envelope.
    pub fn ok(items: Vec<T>) -> Self {
        Self {
            success: true,
            items,
            message: None,
        }
    }

    /// Failed envelope.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            items: Vec::new(),
            message: Some(message.into()),
        }
    }

    /// Returns true if the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the items, or an error carrying the server message.
    pub fn into_items(self) -> HavenResult<Vec<T>> {
        if self.success {
            Ok(self.items)
        } else {
            Err(failure(self.message))
        }
    }

    /// Returns the items on success, an empty list otherwise.
    ///
    /// Discards the failure reason; demonstration use only.
    pub fn demo_unpack(self) -> Vec<T> {
        if self.success {
            self.items
        } else {
            Vec::new()
        }
    }
}

impl ActionResult {
    /// Returns true if the call succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns `Ok(())` on success, or an error carrying the server message.
    pub fn into_result(self) -> HavenResult<()> {
        if self.success {
            Ok(())
        } else {
            Err(failure(self.message))
        }
    }
}
