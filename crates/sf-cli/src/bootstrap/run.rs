//! Command dispatch for the binary.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use tracing::{info, info_span, Instrument};

use super::config::resolve_config;
use super::wiring::build_runtime;
use crate::commands::{login, register, strength, Cli, Commands};
use crate::render::Renderer;

/// Run one parsed command line.
///
/// Returns a failure exit code when the command finished but did not reach
/// its goal (registration rejected, form incomplete).
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let color = !cli.no_color && io::stdout().is_terminal();
    let renderer = Renderer::new(color);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Strength { password } => {
            strength::run(&password, renderer, cli.format, &mut stdout)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Register(args) => {
            let config = resolve_config(cli.config, cli.api_base_url)?;
            let runtime = build_runtime(&config, color)?;

            let input = register::collect_input(&args, &mut io::stdin().lock(), &mut io::stderr())?;
            let outcome = register::run(
                &runtime.orchestrator,
                &runtime.router,
                &args,
                input,
                renderer,
                cli.format,
                &mut stdout,
            )
            .instrument(info_span!("cli.register", api_base_url = %config.api_base_url))
            .await?;

            info!(?outcome, "registration finished");
            Ok(if outcome.reached(runtime.router.login_path()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Login => {
            let config = resolve_config(cli.config, cli.api_base_url)?;
            let runtime = build_runtime(&config, color)?;
            login::run(&runtime.orchestrator, &runtime.router, &mut stdout).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
