//! Registry of all source text encountered during a compilation session.

use std::collections::HashMap;

/// The source registry, owning the full text of every file loaded by the
/// import machinery during a compilation session.
///
/// Lookups are by exact filename key; no path normalization or resolution
/// happens here — whoever loads a file decides the key it is stored under.
/// The registry performs no I/O itself. Once populated it is read-only from
/// the diagnostics side and can be shared across threads behind a shared
/// reference.
pub struct SourceRegistry {
    contents: HashMap<String, String>,
}

impl SourceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            contents: HashMap::new(),
        }
    }

    /// Records the full text of a file under the given filename key.
    ///
    /// Inserting the same key twice replaces the previous text.
    pub fn insert(&mut self, filename: impl Into<String>, text: impl Into<String>) {
        self.contents.insert(filename.into(), text.into());
    }

    /// Returns the full text stored under `filename`, if any.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.contents.get(filename).map(String::as_str)
    }

    /// Returns `true` if the registry holds text for `filename`.
    pub fn contains(&self, filename: &str) -> bool {
        self.contents.contains_key(filename)
    }

    /// Returns the number of files held by the registry.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns `true` if no files have been recorded.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
