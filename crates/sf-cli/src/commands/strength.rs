use std::io::Write;

use sf_app::usecases::register::StrengthMeterView;
use sf_core::registration::{FormField, RegistrationForm};
use tracing::{debug, info_span};

use super::OutputFormat;
use crate::render::Renderer;

const NO_ASSESSMENT: &str = "No password entered, nothing to assess.";

/// Print the strength meter for `password`.
///
/// An empty password has no assessment: the evaluator is skipped and the
/// command prints a notice (`null` in JSON).
pub fn run(
    password: &str,
    renderer: Renderer,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<Option<StrengthMeterView>> {
    let _span = info_span!("command.strength").entered();

    let mut form = RegistrationForm::new();
    form.set_text(FormField::Password, password);
    let meter = form
        .password_assessment()
        .map(|assessment| StrengthMeterView::from_assessment(&assessment));

    match (&meter, format) {
        (Some(meter), OutputFormat::Text) => writeln!(out, "{}", renderer.render_meter(meter))?,
        (None, OutputFormat::Text) => {
            debug!("empty password, strength evaluation skipped");
            writeln!(out, "{NO_ASSESSMENT}")?
        }
        (_, OutputFormat::Json) => writeln!(out, "{}", serde_json::to_string_pretty(&meter)?)?,
    }
    Ok(meter)
}
