//! Registration use cases.
//!
//! [form edits] ──▶ RegistrationContext ──▶ RegistrationView → front-end
//!                          │
//! [submit / login link] ──▶ RegistrationOrchestrator ──▶ RegistrationApiPort
//!                                     │
//!                                     └──▶ NotificationPort / NavigationPort

pub mod context;
pub mod error_toast;
pub mod form_view;
pub mod orchestrator;

pub use context::RegistrationContext;
pub use error_toast::toast_message;
pub use form_view::{
    RegistrationView, RequirementView, SecretInputView, StrengthMeterView, SubmitControlView,
};
pub use orchestrator::{RegisterError, RegistrationOrchestrator};
