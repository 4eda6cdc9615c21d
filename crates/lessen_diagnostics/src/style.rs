//! Style hook plumbing for terminal rendering.
//!
//! Rendering never emits escape sequences itself. Each text fragment is
//! passed through a host-supplied hook together with a style name; whatever
//! terminal color library the host uses lives entirely behind that hook.

/// A host-supplied styling hook: receives a text fragment and a style name,
/// returns the decorated fragment.
///
/// Style names are not validated — names outside the ones this crate uses
/// reach the hook unchanged.
pub type StyleFn = Box<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Style name for muted context lines.
pub const GREY: &str = "grey";
/// Style name for the error message and emphasized line remainder.
pub const RED: &str = "red";
/// Style name for the single highlighted character at the error column.
pub const BOLD: &str = "bold";
/// Style name for the highlight background.
pub const INVERSE: &str = "inverse";
/// Style name for the terminator closing the context block.
pub const RESET: &str = "reset";

/// The default hook: returns the fragment unchanged.
pub fn identity(text: &str, _style: &str) -> String {
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_ignores_style_name() {
        assert_eq!(identity("abc", GREY), "abc");
        assert_eq!(identity("abc", "no-such-style"), "abc");
        assert_eq!(identity("", RESET), "");
    }
}
