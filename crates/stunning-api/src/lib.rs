//! Typed client for the Stunning studio backend.
//!
//! [`ApiClient`] owns request construction (base URL, JSON content type,
//! bearer token) and response interception (a pluggable
//! [`ResponsePolicy`]). Endpoints are grouped per resource family and
//! reached through accessors such as [`ApiClient::clients`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod policy;
pub mod token;
pub mod types;

#[cfg(test)]
mod test_support;

pub use client::{ApiClient, ApiClientBuilder, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use policy::{Navigator, PolicyAction, RedirectOnUnauthorized, ResponsePolicy};
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
