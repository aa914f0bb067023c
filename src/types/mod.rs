//! Core data types for the Haven API.
//!
//! Server-assigned identifiers default to the nil UUID on payloads that
//! have not been created yet.

mod account;
mod bulletin;
mod conversation;
mod feed;
mod form;
mod roster;

pub use account::*;
pub use bulletin::*;
pub use conversation::*;
pub use feed::*;
pub use form::*;
pub use roster::*;

use serde::Serialize;

/// Skip/take paging parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Paging {
    /// Items to skip.
    pub skip: u32,
    /// Items to return.
    pub take: u32,
}

impl Paging {
    /// Creates paging parameters.
    pub fn new(skip: u32, take: u32) -> Self {
        Self { skip, take }
    }

    /// First item only.
    pub fn first() -> Self {
        Self::new(0, 1)
    }

    /// Everything the server will return.
    pub fn all() -> Self {
        Self::new(0, i32::MAX as u32)
    }
}
