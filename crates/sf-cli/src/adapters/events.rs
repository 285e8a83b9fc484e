//! Redraws the submit control when the registration state changes.

use std::io::{self, Stderr, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use colored::Colorize;
use sf_app::usecases::register::form_view::SUBMIT_BUSY_LABEL;
use sf_core::ports::RegistrationEventPort;
use sf_core::registration::RegistrationState;
use tracing::{debug, warn};

pub struct ConsoleRegistrationEvents<W: Write + Send = Stderr> {
    out: Mutex<W>,
    color: bool,
}

impl ConsoleRegistrationEvents<Stderr> {
    pub fn stderr(color: bool) -> Self {
        Self::with_writer(io::stderr(), color)
    }
}

impl<W: Write + Send> ConsoleRegistrationEvents<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    fn write_line(&self, line: &str) {
        let written = self
            .out
            .lock()
            .map_err(|_| io::Error::other("event writer lock poisoned"))
            .and_then(|mut out| writeln!(out, "{line}").and_then(|_| out.flush()));
        if let Err(err) = written {
            warn!(error = %err, "failed to draw registration state");
        }
    }
}

impl ConsoleRegistrationEvents<Vec<u8>> {
    pub fn output(&self) -> String {
        self.out
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

#[async_trait]
impl<W: Write + Send + 'static> RegistrationEventPort for ConsoleRegistrationEvents<W> {
    async fn emit_registration_state_changed(&self, state: RegistrationState) {
        debug!(?state, "registration state changed");
        if state.is_busy() {
            let label = if self.color {
                SUBMIT_BUSY_LABEL.dimmed().to_string()
            } else {
                SUBMIT_BUSY_LABEL.to_string()
            };
            self.write_line(&label);
        }
    }
}
