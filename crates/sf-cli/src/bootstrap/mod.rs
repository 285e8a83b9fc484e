//! Bootstrap module - Application initialization and wiring
//!
//! - `config`: TOML loading and command-line overrides
//! - `tracing`: subscriber setup
//! - `wiring`: adapters to orchestrator
//! - `run`: command dispatch

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config};
pub use run::run;
pub use tracing::init_tracing_subscriber;
pub use wiring::{build_runtime, CliRuntime};
