//! Structured diagnostics with resolved positions and source extracts.

use crate::failure::RawFailure;
use crate::renderer::{DiagnosticRenderer, TerminalRenderer};
use lessen_source::{locate, SourceRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured description of one detected failure.
///
/// Wraps a [`RawFailure`] together with the position information resolved
/// against the session's [`SourceRegistry`]: a 1-based line, a 0-based
/// column, up to three lines of surrounding source text, and — when the
/// failure surfaced inside an imported file — the line of the inclusion
/// point that led there.
///
/// Position resolution is all-or-nothing: when the registry is missing, the
/// filename is unknown, or the registry has no entry for it, every positional
/// field stays `None` and the diagnostic degrades to message and stack only.
/// Construction itself never fails, whatever shape the raw failure has.
///
/// A diagnostic is immutable once built. It is either inspected field by
/// field (or serialized for structured logs) or rendered through a
/// [`DiagnosticRenderer`]; it performs no I/O after construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The failure category, `"Syntax"` when the raw failure carried none.
    pub kind: String,
    /// The resolved source file, or `None` if unknown.
    pub filename: Option<String>,
    /// Raw character offset of the failure in `filename`'s text.
    pub offset: Option<usize>,
    /// Resolved line number, 1-based.
    pub line: Option<usize>,
    /// Resolved column number, 0-based.
    pub column: Option<usize>,
    /// Line number of the triggering inclusion, 1-based.
    pub call_line: Option<usize>,
    /// Full text of the line at `call_line`.
    pub call_extract: Option<String>,
    /// Text of the lines before, at, and after the failing line. A slot is
    /// `None` when its line index falls outside the file; an empty string
    /// means the line exists and is empty, which is not the same thing.
    pub extract: [Option<String>; 3],
    /// Human-readable description, copied verbatim from the raw failure.
    pub message: String,
    /// Captured stack trace, copied verbatim, never parsed.
    pub stack: Option<String>,
}

impl Diagnostic {
    /// Builds a diagnostic from a raw failure and the session's sources.
    ///
    /// The filename is taken from the failure itself, falling back to
    /// `current_filename` (the file being processed when the failure
    /// surfaced). Positions are resolved only when `sources` holds text for
    /// that filename; a lookup miss leaves every positional field unset
    /// rather than partially populating them.
    pub fn from_failure(
        failure: &RawFailure,
        sources: Option<&SourceRegistry>,
        current_filename: Option<&str>,
    ) -> Self {
        let kind = failure.kind.clone().unwrap_or_else(|| "Syntax".to_string());
        let filename = failure
            .filename
            .clone()
            .or_else(|| current_filename.map(str::to_string));

        let mut diag = Self {
            kind,
            filename,
            offset: None,
            line: None,
            column: None,
            call_line: None,
            call_extract: None,
            extract: [None, None, None],
            message: failure.message.clone(),
            stack: failure.stack.clone(),
        };

        let text = match (sources, diag.filename.as_deref()) {
            (Some(sources), Some(filename)) => sources.get(filename),
            _ => None,
        };
        let Some(text) = text else {
            return diag;
        };

        let lines: Vec<&str> = text.split('\n').collect();
        if let Some(index) = failure.index {
            let loc = locate(index, text);
            diag.offset = Some(index);
            diag.line = Some(loc.line + 1);
            diag.column = Some(loc.column);
            diag.extract = [
                loc.line
                    .checked_sub(1)
                    .and_then(|i| lines.get(i))
                    .map(|s| s.to_string()),
                lines.get(loc.line).map(|s| s.to_string()),
                lines.get(loc.line + 1).map(|s| s.to_string()),
            ];
        }
        if let Some(call) = failure.call {
            let call_line = locate(call, text).line;
            diag.call_line = Some(call_line + 1);
            diag.call_extract = lines.get(call_line).map(|s| s.to_string());
        }
        diag
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TerminalRenderer::plain().render(self))
    }
}

impl std::error::Error for Diagnostic {}
