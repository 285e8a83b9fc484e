//! # sf-core
//!
//! Core domain models and business logic for storefront registration.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod ports;
pub mod registration;
pub mod security;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use registration::{
    Notification, NotificationKind, PasswordAssessment, RegisterRequest, RegistrationForm,
    RegistrationReply, RegistrationState, Route, StrengthLevel,
};
pub use security::SecretString;
