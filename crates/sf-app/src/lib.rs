//! Storefront registration application orchestration layer
//!
//! This crate contains the registration use cases that sit between the
//! front-end and the infrastructure ports.

pub mod usecases;

pub use usecases::{RegisterError, RegistrationOrchestrator, RegistrationView};
