use std::sync::Arc;

use sf_core::registration::{RegistrationForm, RegistrationState};
use tokio::sync::{Mutex, MutexGuard};

/// Shared registration context containing state, form and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring several locks, acquire `dispatch_lock` first, then `state`,
/// then `form`. Never hold `form` across an await on a port.
/// - `dispatch_lock`: Used only for `dispatch` operations to serialize concurrent calls.
/// - `state`: Used for both reading (`get_state`) and writing (during `dispatch`).
/// - `form`: Used by field edits, which never take `dispatch_lock`.
#[derive(Clone)]
pub struct RegistrationContext {
    state: Arc<Mutex<RegistrationState>>,
    form: Arc<Mutex<RegistrationForm>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl RegistrationContext {
    /// Creates a new RegistrationContext with the given initial state and an empty form.
    pub fn new(initial_state: RegistrationState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            form: Arc::new(Mutex::new(RegistrationForm::new())),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub async fn get_state(&self) -> RegistrationState {
        self.state.lock().await.clone()
    }

    /// Acquires the dispatch lock for serializing concurrent dispatch calls.
    ///
    /// Returns a guard that releases the lock when dropped.
    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Updates the state to the given value.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: RegistrationState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }

    pub async fn form(&self) -> MutexGuard<'_, RegistrationForm> {
        self.form.lock().await
    }

    /// Drops the current form record (zeroing its secrets) and starts a fresh one.
    pub async fn reset_form(&self) {
        let mut guard = self.form.lock().await;
        *guard = RegistrationForm::new();
    }
}

impl Default for RegistrationContext {
    fn default() -> Self {
        Self::new(RegistrationState::Editing)
    }
}
