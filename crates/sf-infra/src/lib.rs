//! # sf-infra
//!
//! Infrastructure adapters for storefront registration.
//!
//! Implements the `sf-core` ports that talk to the outside world.

pub mod http;

pub use http::{HttpClient, HttpClientError, HttpRegistrationApi};
