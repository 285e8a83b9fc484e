//! `register` command: fill the form, show it, submit it.

use std::io::{self, BufRead, Write};

use clap::Args;
use sf_app::usecases::register::RegistrationView;
use sf_app::{RegisterError, RegistrationOrchestrator};
use sf_core::registration::{FormField, FormToggle, RegistrationState};
use sf_core::SecretString;
use tracing::{info, info_span, Instrument};

use super::OutputFormat;
use crate::adapters::TerminalRouter;
use crate::render::Renderer;

#[derive(Args, Debug, Default, Clone)]
pub struct RegisterArgs {
    /// Full name (prompted when omitted)
    #[arg(long)]
    pub name: Option<String>,

    /// Email address (prompted when omitted)
    #[arg(long)]
    pub email: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation (prompted when omitted)
    #[arg(long)]
    pub confirm_password: Option<String>,

    /// Agree to the Terms of Service & Privacy Policy
    #[arg(long)]
    pub agree_terms: bool,

    /// Subscribe to the newsletter
    #[arg(long)]
    pub subscribe_newsletter: bool,

    /// Show passwords in clear text in the rendered form
    #[arg(long)]
    pub show_password: bool,
}

/// Text fields after prompting for the missing ones.
#[derive(Debug, Default)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Where the flow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub state: RegistrationState,
    pub navigated_to: Option<String>,
}

impl RegisterOutcome {
    pub fn reached(&self, path: &str) -> bool {
        self.navigated_to.as_deref() == Some(path)
    }
}

/// Take text fields from flags, prompting on `input` for any that are absent.
/// End of input yields an empty value.
pub fn collect_input<R: BufRead, W: Write>(
    args: &RegisterArgs,
    input: &mut R,
    prompt: &mut W,
) -> io::Result<FormInput> {
    let mut ask = |label: &str, given: &Option<String>| -> io::Result<String> {
        if let Some(value) = given {
            return Ok(value.clone());
        }
        write!(prompt, "{label}: ")?;
        prompt.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    };

    Ok(FormInput {
        name: ask("Name", &args.name)?,
        email: ask("Email", &args.email)?,
        password: SecretString::new(ask("Password", &args.password)?),
        confirm_password: SecretString::new(ask("Confirm Password", &args.confirm_password)?),
    })
}

/// Fill the form, print it, submit once and report the route reached.
pub async fn run(
    orchestrator: &RegistrationOrchestrator,
    router: &TerminalRouter,
    args: &RegisterArgs,
    input: FormInput,
    renderer: Renderer,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<RegisterOutcome> {
    let span = info_span!("command.register");
    async {
        fill_form(orchestrator, args, input).await;

        let view = orchestrator.view().await;
        print_view(&view, renderer, format, out)?;
        if !view.submit.enabled {
            writeln!(out, "Fill in every field to enable {}.", view.submit.label)?;
        }

        let state = match orchestrator.submit().await {
            Ok(state) => state,
            Err(RegisterError::Busy) => anyhow::bail!("a registration request is already in flight"),
            Err(err) => return Err(err.into()),
        };

        let navigated_to = router.current_path();
        if let Some(path) = &navigated_to {
            writeln!(out, "Navigated to {path}")?;
        }
        info!(?state, navigated_to = ?navigated_to, "register command finished");

        Ok(RegisterOutcome {
            state,
            navigated_to,
        })
    }
    .instrument(span)
    .await
}

async fn fill_form(orchestrator: &RegistrationOrchestrator, args: &RegisterArgs, input: FormInput) {
    orchestrator.update_text(FormField::Name, input.name).await;
    orchestrator.update_text(FormField::Email, input.email).await;
    orchestrator
        .update_text(FormField::Password, input.password.expose())
        .await;
    orchestrator
        .update_text(FormField::ConfirmPassword, input.confirm_password.expose())
        .await;

    orchestrator
        .set_toggle(FormToggle::AgreeToTerms, args.agree_terms)
        .await;
    orchestrator
        .set_toggle(FormToggle::SubscribeNewsletter, args.subscribe_newsletter)
        .await;
    orchestrator
        .set_toggle(FormToggle::ShowPassword, args.show_password)
        .await;
    orchestrator
        .set_toggle(FormToggle::ShowConfirmPassword, args.show_password)
        .await;
}

fn print_view(
    view: &RegistrationView,
    renderer: Renderer,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}\n", renderer.render_view(view))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(view)?)?,
    }
    Ok(())
}
