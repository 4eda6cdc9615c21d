//! Diagnostic construction and rendering for the lessen compiler front end.
//!
//! When the parser (or an imported file's parser) fails, the raw failure is
//! wrapped into a structured [`Diagnostic`] carrying the offending file, the
//! resolved line/column position, and a window of surrounding source lines.
//! The thread-safe [`DiagnosticSink`] accumulates diagnostics during a
//! session, and [`TerminalRenderer`] formats them for human consumption with
//! a pluggable style hook.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod failure;
pub mod renderer;
pub mod sink;
pub mod style;

pub use diagnostic::Diagnostic;
pub use failure::RawFailure;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use sink::DiagnosticSink;
pub use style::{identity, StyleFn};
