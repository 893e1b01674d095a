/// Filler prepended once per nesting depth.
pub const DEFAULT_INDENT: &str = "....";

/// Configuration options for rendering a directory listing.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Indent unit repeated once per depth level
    pub indent: String,

    /// Treat symlinks to directories as directories and descend into them
    pub follow_links: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            follow_links: true,
        }
    }
}

impl RenderOptions {
    /// Create a new RenderOptions with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent unit
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}
