//! Registration domain module.
//!
//! Form record, password strength and the registration state machine.

pub mod form;
pub mod password;
pub mod reply;
pub mod state_machine;

pub use form::{FormField, FormToggle, RegisterRequest, RegistrationForm};
pub use password::{
    PasswordAssessment, PasswordRequirements, Requirement, StrengthColor, StrengthLevel,
    MAX_STRENGTH_SCORE, MIN_PASSWORD_LEN,
};
pub use reply::{Notification, NotificationKind, RegistrationReply, Route};
pub use state_machine::{
    RegistrationAction, RegistrationEvent, RegistrationState, RegistrationStateMachine,
    SubmitCheck, ValidationError,
};
