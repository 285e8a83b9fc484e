//! Dependency wiring: connects the HTTP adapter and the terminal adapters to
//! the registration orchestrator.

use std::sync::Arc;

use anyhow::Context;
use sf_app::RegistrationOrchestrator;
use sf_core::config::AppConfig;
use sf_infra::HttpRegistrationApi;
use tracing::debug;

use crate::adapters::{ConsoleRegistrationEvents, ConsoleToaster, TerminalRouter};

/// Everything a command needs at runtime.
pub struct CliRuntime {
    pub orchestrator: RegistrationOrchestrator,
    /// Kept outside the orchestrator so commands can report where it went.
    pub router: Arc<TerminalRouter>,
}

pub fn build_runtime(config: &AppConfig, color: bool) -> anyhow::Result<CliRuntime> {
    let registration_api = Arc::new(
        HttpRegistrationApi::from_config(config)
            .context("Failed to build registration HTTP adapter")?,
    );
    let router = Arc::new(TerminalRouter::from_config(config));
    let toasts = Arc::new(ConsoleToaster::stderr(color));
    let events = Arc::new(ConsoleRegistrationEvents::stderr(color));

    debug!(
        api_base_url = %config.api_base_url,
        register_path = %config.register_path,
        login_route = %config.login_route,
        "registration runtime wired"
    );

    Ok(CliRuntime {
        orchestrator: RegistrationOrchestrator::new(
            registration_api,
            toasts,
            router.clone(),
            events,
        ),
        router,
    })
}
