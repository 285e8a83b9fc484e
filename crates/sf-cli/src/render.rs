//! Text rendering of the registration view.

use colored::{ColoredString, Colorize};
use sf_app::usecases::register::{RegistrationView, StrengthMeterView};
use sf_core::registration::StrengthColor;

const METER_CELLS: usize = 10;
const TITLE: &str = "Create Account";
const TERMS_LABEL: &str = "I agree to the Terms of Service & Privacy Policy";
const NEWSLETTER_LABEL: &str = "Subscribe to our newsletter";
const LOGIN_PROMPT: &str = "Already have an account? Login";

/// Renders views with or without ANSI colour.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render_view(&self, view: &RegistrationView) -> String {
        let mut lines = vec![self.paint(TITLE, |s| s.bold()), String::new()];

        lines.push(field_line("Name", &view.name));
        lines.push(field_line("Email", &view.email));
        lines.push(field_line("Password", &view.password.display));
        if let Some(meter) = &view.strength {
            lines.push(self.render_meter(meter));
        }
        lines.push(field_line("Confirm Password", &view.confirm_password.display));
        lines.push(String::new());
        lines.push(checkbox_line(view.agree_to_terms, TERMS_LABEL));
        lines.push(checkbox_line(view.subscribe_newsletter, NEWSLETTER_LABEL));
        lines.push(String::new());

        let button = format!("[ {} ]", view.submit.label);
        lines.push(match (view.submit.enabled, view.submit.highlighted) {
            (true, _) => self.paint(&button, |s| s.green().bold()),
            (false, true) => self.paint(&format!("{button} (busy)"), |s| s.yellow()),
            (false, false) => self.paint(&format!("{button} (disabled)"), |s| s.dimmed()),
        });
        lines.push(self.paint(LOGIN_PROMPT, |s| s.dimmed()));

        lines.join("\n")
    }

    /// Meter bar, strength label and the requirement checklist.
    pub fn render_meter(&self, meter: &StrengthMeterView) -> String {
        let filled = ((meter.fill * METER_CELLS as f32).round() as usize).min(METER_CELLS);
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(METER_CELLS - filled)
        );
        let color = meter.color;
        let mut lines = vec![
            format!(
                "  Password strength: {}",
                self.paint(meter.label, |s| strength_color(s, color))
            ),
            format!(
                "  [{}] {}%",
                self.paint(&bar, |s| strength_color(s, color)),
                meter.percent()
            ),
        ];
        for requirement in &meter.checklist {
            let line = if requirement.met {
                self.paint(&format!("✔ {}", requirement.label), |s| s.green())
            } else {
                self.paint(&format!("✖ {}", requirement.label), |s| s.dimmed())
            };
            lines.push(format!("    {line}"));
        }
        lines.join("\n")
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

fn strength_color(text: &str, color: StrengthColor) -> ColoredString {
    match color {
        StrengthColor::Red => text.red(),
        StrengthColor::Yellow => text.yellow(),
        StrengthColor::Blue => text.blue(),
        StrengthColor::Green => text.green(),
    }
}

fn field_line(label: &str, value: &str) -> String {
    format!("{:<18}{}", format!("{label}:"), value)
}

fn checkbox_line(checked: bool, label: &str) -> String {
    format!("[{}] {label}", if checked { "x" } else { " " })
}
