//! [`Api`] operations implemented by [`Http`] client.
//!
//! [`Api`]: crate::infra::Api
//! [`Http`]: super::Http

mod accessory;
mod user;
mod vehicle;

/// Sentinel sent instead of a password to keep the current one.
const KEEP_EXISTING_PASSWORD: &str = "KEEP_EXISTING_PASSWORD";
