//! Business logic use cases

pub mod register;

pub use register::{RegisterError, RegistrationOrchestrator, RegistrationView};
