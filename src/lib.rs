//! Blocking client for the Torn API v2.
//!
//! ```no_run
//! let client = torn_api::Client::new("YOUR_API_KEY")?;
//! let members = client.faction_members(Some(99), None)?;
//! let now = client.user_timestamp()?;
//! # Ok::<(), torn_api::Error>(())
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod endpoints;

pub use client::{Client, ClientConfig, Error, Params, Request, Response, Result};
pub use endpoint::{Category, Endpoint, Identifier};
