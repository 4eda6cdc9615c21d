//! Thread-safe diagnostic accumulator for a compilation session.

use crate::diagnostic::Diagnostic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A thread-safe accumulator for diagnostics built during a session.
///
/// The import machinery may parse files on several threads; each thread can
/// emit diagnostics concurrently via [`emit`](Self::emit). The count is
/// tracked atomically so `has_errors` checks never lock the vector.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    count: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            count: AtomicUsize::new(0),
        }
    }

    /// Emits a diagnostic into the sink.
    pub fn emit(&self, diag: Diagnostic) {
        self.count.fetch_add(1, Ordering::Relaxed);
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }

    /// Returns `true` if any diagnostics have been emitted.
    pub fn has_errors(&self) -> bool {
        self.count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::RawFailure;

    fn make_diagnostic(message: &str) -> Diagnostic {
        Diagnostic::from_failure(&RawFailure::new(message), None, None)
    }

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert_eq!(sink.error_count(), 0);
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn emit_and_count() {
        let sink = DiagnosticSink::new();
        sink.emit(make_diagnostic("first"));
        sink.emit(make_diagnostic("second"));
        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 2);
        assert_eq!(sink.diagnostics().len(), 2);
    }

    #[test]
    fn take_all_drains() {
        let sink = DiagnosticSink::new();
        sink.emit(make_diagnostic("oops"));
        let all = sink.take_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].message, "oops");
        assert!(sink.take_all().is_empty());
        // The count survives draining; it tracks emissions, not contents.
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn concurrent_emission() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(DiagnosticSink::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    sink.emit(make_diagnostic("concurrent"));
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(sink.error_count(), 400);
        assert_eq!(sink.diagnostics().len(), 400);
    }
}
