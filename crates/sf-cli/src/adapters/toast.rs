//! Toast surface printed to the terminal.

use std::io::{self, Stderr, Write};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use colored::Colorize;
use sf_core::ports::NotificationPort;
use sf_core::registration::{Notification, NotificationKind};

/// Writes one line per toast, `✔` for success and `✖` for errors.
pub struct ConsoleToaster<W: Write + Send = Stderr> {
    out: Mutex<W>,
    color: bool,
}

impl ConsoleToaster<Stderr> {
    pub fn stderr(color: bool) -> Self {
        Self::with_writer(io::stderr(), color)
    }
}

impl<W: Write + Send> ConsoleToaster<W> {
    pub fn with_writer(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }
}

impl ConsoleToaster<Vec<u8>> {
    /// Everything written so far (buffer-backed toasters only).
    pub fn output(&self) -> String {
        self.out
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

pub fn format_toast(notification: &Notification, color: bool) -> String {
    let (icon, message) = (
        match notification.kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
        },
        notification.message.as_str(),
    );
    if !color {
        return format!("{icon} {message}");
    }
    match notification.kind {
        NotificationKind::Success => format!("{} {}", icon.green().bold(), message.green()),
        NotificationKind::Error => format!("{} {}", icon.red().bold(), message.red()),
    }
}

#[async_trait]
impl<W: Write + Send + 'static> NotificationPort for ConsoleToaster<W> {
    async fn notify(&self, notification: Notification) -> anyhow::Result<()> {
        let line = format_toast(&notification, self.color);
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("toast writer lock poisoned"))?;
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_one_line_per_toast() {
        let toaster = ConsoleToaster::with_writer(Vec::new(), false);

        toaster
            .notify(Notification::success("Registered"))
            .await
            .unwrap();
        toaster
            .notify(Notification::error("Email exists"))
            .await
            .unwrap();

        assert_eq!(toaster.output(), "✔ Registered\n✖ Email exists\n");
    }

    #[test]
    fn colored_toast_keeps_message_text() {
        colored::control::set_override(true);
        let line = format_toast(&Notification::error("Network Error"), true);
        assert!(line.contains("Network Error"));
        assert!(line.contains("\u{1b}["));
    }
}
