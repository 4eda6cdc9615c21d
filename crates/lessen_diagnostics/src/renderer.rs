//! Human-readable rendering of diagnostics with pluggable styling.

use crate::diagnostic::Diagnostic;
use crate::style::{self, StyleFn};

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    ///
    /// Rendering is a pure function of the diagnostic and the renderer's
    /// configuration: identical inputs produce byte-identical output.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders a diagnostic as a multi-line terminal report.
///
/// Produces output like:
/// ```text
/// SyntaxError: missing semicolon in a.less on line 2, column 10:
/// 1 body {
/// 2   color: red;
/// 3 }
/// ```
/// with the surrounding context lines, the failing character, and the
/// position trailer each routed through the configured style hook.
///
/// Rendering is defensive: fields left unset during construction skip their
/// segments instead of failing, so a degraded diagnostic (no source text
/// available) still renders as its header line.
pub struct TerminalRenderer {
    stylize: StyleFn,
}

impl TerminalRenderer {
    /// Creates a renderer with the default identity styling (no decoration).
    pub fn plain() -> Self {
        Self {
            stylize: Box::new(style::identity),
        }
    }

    /// Creates a renderer that routes every fragment through `stylize`.
    ///
    /// The hook receives each fragment together with one of the style names
    /// from [`style`] and returns the decorated text.
    pub fn with_stylize(stylize: impl Fn(&str, &str) -> String + Send + Sync + 'static) -> Self {
        Self {
            stylize: Box::new(stylize),
        }
    }

    /// Formats the failing line, emphasizing the character at the error
    /// column and the remainder of the line after it. Characters before the
    /// column are left undecorated.
    fn focus_line(&self, text: &str, line: usize, column: usize) -> String {
        let stylize = &self.stylize;
        let mut out = format!("{line} ");
        if !text.is_empty() {
            let before: String = text.chars().take(column).collect();
            let at: String = text.chars().skip(column).take(1).collect();
            let after: String = text.chars().skip(column + 1).collect();
            let emphasized = stylize(&(stylize(&at, style::BOLD) + &after), style::RED);
            out.push_str(&before);
            out.push_str(&stylize(&emphasized, style::INVERSE));
        }
        out
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let stylize = &self.stylize;
        let line = diag.line.unwrap_or(0);
        let column = diag.column.unwrap_or(0);

        let mut context = Vec::new();
        if let Some(before) = &diag.extract[0] {
            context.push(stylize(
                &format!("{} {}", line.saturating_sub(1), before),
                style::GREY,
            ));
        }
        if let Some(focus) = &diag.extract[1] {
            context.push(self.focus_line(focus, line, column));
        }
        if let Some(after) = &diag.extract[2] {
            context.push(stylize(&format!("{} {}", line + 1, after), style::GREY));
        }
        let mut block = context.join("\n");
        block.push_str(&stylize("", style::RESET));
        block.push('\n');

        let mut out = stylize(&format!("{}Error: {}", diag.kind, diag.message), style::RED);
        if let Some(filename) = &diag.filename {
            out.push_str(&format!(" in {filename}"));
            if let (Some(line), Some(column)) = (diag.line, diag.column) {
                out.push_str(&stylize(
                    &format!(" on line {}, column {}:", line, column + 1),
                    style::GREY,
                ));
            }
        }
        out.push('\n');
        out.push_str(&block);

        if let Some(call_line) = diag.call_line {
            out.push_str(&stylize("from ", style::RED));
            out.push_str(diag.filename.as_deref().unwrap_or(""));
            out.push('\n');
            out.push_str(&stylize(&call_line.to_string(), style::GREY));
            out.push(' ');
            out.push_str(diag.call_extract.as_deref().unwrap_or(""));
            out.push('\n');
        }

        out
    }
}
