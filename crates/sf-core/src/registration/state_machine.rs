//! Registration state machine.
//!
//! Defines a pure state transition function for the registration flow.

use tracing::debug;

use super::reply::{Notification, RegistrationReply, Route};

/// Registration flow state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationState {
    /// Form is editable and the submit control reflects field completeness.
    Editing,
    /// A registration request is in flight.
    Submitting,
    /// The view has been left; the form record is discarded.
    NavigatedAway { route: Route },
}

impl RegistrationState {
    pub fn is_busy(&self) -> bool {
        matches!(self, RegistrationState::Submitting)
    }
}

/// Local preconditions of a submit, taken from the form at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitCheck {
    /// Name, email, password and confirmation are all non-empty.
    pub complete: bool,
    pub passwords_match: bool,
    pub agreed_to_terms: bool,
}

impl SubmitCheck {
    /// First blocking validation failure, if any.
    pub fn validation_error(&self) -> Option<ValidationError> {
        if !self.passwords_match {
            Some(ValidationError::PasswordMismatch)
        } else if !self.agreed_to_terms {
            Some(ValidationError::TermsNotAccepted)
        } else {
            None
        }
    }
}

/// Events that drive the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationEvent {
    /// User submits the form.
    Submit(SubmitCheck),
    /// The backend answered with a parseable body.
    ReplyReceived(RegistrationReply),
    /// Transport or unexpected failure, already translated for display.
    RequestFailed { message: String },
    /// User follows the "already have an account" link.
    GoToLogin,
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegistrationAction {
    /// Send the registration request built from the form.
    SendRegistration,
    /// Show a toast.
    Notify(Notification),
    /// Navigate to another view.
    Navigate(Route),
}

/// Local validation failures that block a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Password and confirm password must be the same")]
    PasswordMismatch,
    #[error("You must agree to the terms and privacy policy")]
    TermsNotAccepted,
}

/// Pure registration state machine.
pub struct RegistrationStateMachine;

impl RegistrationStateMachine {
    pub fn transition(
        state: RegistrationState,
        event: RegistrationEvent,
    ) -> (RegistrationState, Vec<RegistrationAction>) {
        match (state, event) {
            (RegistrationState::Editing, RegistrationEvent::Submit(check)) => {
                if !check.complete {
                    // submit control is disabled
                    return (RegistrationState::Editing, Vec::new());
                }
                if let Some(err) = check.validation_error() {
                    return (
                        RegistrationState::Editing,
                        vec![RegistrationAction::Notify(Notification::error(
                            err.to_string(),
                        ))],
                    );
                }
                (
                    RegistrationState::Submitting,
                    vec![RegistrationAction::SendRegistration],
                )
            }
            (RegistrationState::Editing, RegistrationEvent::GoToLogin) => (
                RegistrationState::NavigatedAway {
                    route: Route::Login,
                },
                vec![RegistrationAction::Navigate(Route::Login)],
            ),
            (RegistrationState::Submitting, RegistrationEvent::ReplyReceived(reply)) => {
                if reply.error {
                    (
                        RegistrationState::Editing,
                        vec![RegistrationAction::Notify(Notification::error(
                            reply.message,
                        ))],
                    )
                } else if reply.success {
                    (
                        RegistrationState::NavigatedAway {
                            route: Route::Login,
                        },
                        vec![
                            RegistrationAction::Notify(Notification::success(reply.message)),
                            RegistrationAction::Navigate(Route::Login),
                        ],
                    )
                } else {
                    (RegistrationState::Editing, Vec::new())
                }
            }
            (RegistrationState::Submitting, RegistrationEvent::RequestFailed { message }) => (
                RegistrationState::Editing,
                vec![RegistrationAction::Notify(Notification::error(message))],
            ),
            (state, event) => {
                debug!(?state, ?event, "registration event ignored in current state");
                (state, Vec::new())
            }
        }
    }
}
