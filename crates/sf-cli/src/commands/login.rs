use std::io::Write;

use sf_app::RegistrationOrchestrator;
use tracing::{info_span, Instrument};

use crate::adapters::TerminalRouter;

/// Follow the login link from an untouched form.
pub async fn run(
    orchestrator: &RegistrationOrchestrator,
    router: &TerminalRouter,
    out: &mut impl Write,
) -> anyhow::Result<Option<String>> {
    orchestrator
        .go_to_login()
        .instrument(info_span!("command.login"))
        .await?;

    let path = router.current_path();
    if let Some(path) = &path {
        writeln!(out, "Navigated to {path}")?;
    }
    Ok(path)
}
