//! Client library for the SinkingYachts phishing database API.
//!
//! Wraps the REST endpoints of `phish.sinking.yachts`: the full domain list,
//! single-domain membership checks, the database size, and the recent-changes
//! feed (split client-side into additions and removals). Every request
//! carries the caller's identity in the `X-Identity` header.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sy_phishing_api::PhishingClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sy_phishing_api::PhishingError> {
//!     let client = PhishingClient::new("examplebot (contact@example.com)")?;
//!
//!     if client.check_domain("login-micros0ft.com").await? {
//!         println!("domain is a known phish");
//!     }
//!
//!     // Everything added over the last hour.
//!     for domain in client.recent_additions(3600).await? {
//!         println!("new: {domain}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Operations return typed errors. Callers migrating from bindings that
//! swallowed failures into sentinel values (`-1`, `false`, empty lists) can
//! use [`LenientClient`] to keep that contract.

mod client;
mod compat;
mod error;
mod types;

pub use client::{ClientBuilder, PhishingClient, MAX_RECENT_WINDOW};
pub use compat::LenientClient;
pub use error::PhishingError;
pub use types::ChangeRecord;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, PhishingError>;
