//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! the HTTP client, the toast surface and the router.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `sf-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or front-end layer?**
//!
//! If all three answers are **yes**, place it in `sf-core/ports`.
//! Otherwise, place it in the relevant domain submodule.

pub mod navigation;
pub mod notification;
pub mod registration_api;
pub mod registration_event_port;

pub use navigation::NavigationPort;
pub use notification::NotificationPort;
pub use registration_api::{ApiError, RegistrationApiPort};
pub use registration_event_port::RegistrationEventPort;
