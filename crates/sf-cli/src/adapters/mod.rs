//! Terminal implementations of the front-end ports.

pub mod events;
pub mod router;
pub mod toast;

pub use events::ConsoleRegistrationEvents;
pub use router::TerminalRouter;
pub use toast::ConsoleToaster;
