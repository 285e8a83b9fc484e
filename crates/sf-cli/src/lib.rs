//! # sf-cli
//!
//! Terminal front-end for storefront registration: command-line parsing,
//! bootstrap, and the toast, router and state-change adapters.

pub mod adapters;
pub mod bootstrap;
pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, OutputFormat};
