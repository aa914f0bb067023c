//! # Haven Integration Library
//!
//! A Haven API client and the third-party automation sample built on it:
//! - Typed services per resource, singular for single records and plural
//!   for lists
//! - Envelope adapters that turn `success == false` into errors
//! - Cached anonymous and authenticated clients with per-call tenant routing
//! - Sample use cases for bulletins, forms, conversations, push, principals,
//!   seats, groups and staff
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_haven::{AccountInfo, HavenConfig, SampleConsumer};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let account = AccountInfo::with_credentials(Uuid::new_v4(), "key", "secret");
//!     let config = HavenConfig::builder().account(account).build()?;
//!
//!     let mut consumer = SampleConsumer::from_config(config);
//!     if let Some(me) = consumer.get_self_unwrapped().await? {
//!         println!("I am: {:?}", me.email);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;
pub mod types;

// Authentication
pub mod auth;

// Transport
pub mod client;
pub mod envelope;
pub mod headers;

// API Services
pub mod services;

// Sample use cases
pub mod consumer;
pub mod scenarios;

// Re-exports for convenience
pub use auth::Credentials;
pub use client::HavenClient;
pub use config::{HavenConfig, HavenConfigBuilder};
pub use consumer::{ClientFactory, FormAnswers, SampleConsumer};
pub use envelope::{ActionResult, ItemResult, ListResult};
pub use errors::{HavenError, HavenErrorKind, HavenResult};
pub use scenarios::{Runner, Scenario};
pub use types::*;
