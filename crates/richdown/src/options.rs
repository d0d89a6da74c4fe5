//! Configuration options for Markdown serialization

/// Options for Markdown serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Markup emitted for a hard line break
    pub hard_break: String,

    /// Tightness for lists that don't carry a `tight` attribute
    pub tight_lists: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            hard_break: "\\\n".to_string(),
            tight_lists: false,
        }
    }
}
