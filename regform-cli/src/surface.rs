//! Terminal rendering of field and form feedback.

use std::io::Write;

use crossterm::style::Stylize;
use log::debug;
use regform_lib::{FieldId, FieldPresenter};

/// Prints feedback lines to `out` as the form reports them.
///
/// A terminal cannot take a line back, so clearing only logs; the next
/// prompt round starts from a clean slate anyway.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        // Stdout closed = nobody is watching
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

impl<W: Write> FieldPresenter for TerminalPresenter<W> {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.line(format!("  ✗ {}: {}", field.label(), message).red());
    }

    fn show_success(&mut self, field: FieldId) {
        self.line(format!("  ✓ {}", field.label()).green());
    }

    fn clear_field(&mut self, field: FieldId) {
        debug!("Cleared {}", field);
    }

    fn reset_values(&mut self) {
        self.line("Form reset.".dim());
    }

    fn show_banner(&mut self, message: &str) {
        self.line("");
        self.line(message.bold().green());
    }

    fn clear_banner(&mut self) {
        debug!("Banner cleared");
    }

    fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.line("(form locked until reset)".dim());
        }
    }
}
