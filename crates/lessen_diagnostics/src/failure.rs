//! The raw failure description handed over by the parser or import machinery.

use serde::{Deserialize, Serialize};

/// A raw failure description as produced at the detection site.
///
/// This is the boundary shape handed to
/// [`Diagnostic::from_failure`](crate::Diagnostic::from_failure): a category
/// label, an optional filename, raw character offsets, and free-form
/// message/stack text. Offsets are not
/// pre-resolved positions — line/column resolution happens during diagnostic
/// construction. Every field except `message` may be absent; a partially
/// populated failure must still produce a usable diagnostic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawFailure {
    /// The failure category (e.g. `"Parse"`, `"Name"`). Defaults to
    /// `"Syntax"` during diagnostic construction when absent.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The file the failure was detected in, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Raw character offset of the failure within that file's text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Human-readable description of the failure.
    pub message: String,
    /// Raw character offset of the inclusion point, when the failure
    /// surfaced inside an imported file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call: Option<usize>,
    /// Captured stack trace, kept for debugging and never parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl RawFailure {
    /// Creates a failure carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the failure category.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the filename the failure was detected in.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the raw character offset of the failure.
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Sets the raw character offset of the inclusion point.
    pub fn with_call(mut self, call: usize) -> Self {
        self.call = Some(call);
        self
    }

    /// Sets the captured stack trace.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let failure = RawFailure::new("unexpected token")
            .with_kind("Parse")
            .with_filename("main.less")
            .with_index(42)
            .with_call(7)
            .with_stack("at parse (parser.rs:10)");
        assert_eq!(failure.kind.as_deref(), Some("Parse"));
        assert_eq!(failure.filename.as_deref(), Some("main.less"));
        assert_eq!(failure.index, Some(42));
        assert_eq!(failure.call, Some(7));
        assert_eq!(failure.stack.as_deref(), Some("at parse (parser.rs:10)"));
    }

    #[test]
    fn message_only() {
        let failure = RawFailure::new("oops");
        assert_eq!(failure.message, "oops");
        assert!(failure.kind.is_none());
        assert!(failure.index.is_none());
    }

    #[test]
    fn kind_serializes_as_type() {
        let failure = RawFailure::new("bad value").with_kind("Argument");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["type"], "Argument");
        assert_eq!(json["message"], "bad value");
        assert!(json.get("filename").is_none());
    }

    #[test]
    fn deserializes_boundary_shape() {
        let json = r#"{"type":"Name","filename":"a.less","index":3,"message":"m","call":1}"#;
        let failure: RawFailure = serde_json::from_str(json).unwrap();
        assert_eq!(failure.kind.as_deref(), Some("Name"));
        assert_eq!(failure.index, Some(3));
        assert_eq!(failure.call, Some(1));
        assert!(failure.stack.is_none());
    }
}
