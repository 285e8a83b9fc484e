use crate::registration::RegistrationState;

/// Receives every registration state change, so the front-end can redraw
/// the submit control ("Register" / "Creating Account...").
#[async_trait::async_trait]
pub trait RegistrationEventPort: Send + Sync {
    async fn emit_registration_state_changed(&self, state: RegistrationState);
}
