/// Marker emitted in place of the children of a directory that cannot be listed.
pub const PERMISSION_DENIED_MARKER: &str = "[Permission Denied]";

/// What a rendered line stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A directory; rendered with a trailing `/`.
    Directory,
    /// A file or any other entry that is not descended into.
    Entry,
    /// The directory above could not be listed.
    PermissionDenied,
}

/// One line of a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    /// Nesting depth (0 = root)
    pub depth: usize,

    pub kind: LineKind,

    /// Entry name; empty for the permission marker
    pub name: String,
}

impl TreeLine {
    pub fn directory(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: LineKind::Directory,
            name: name.into(),
        }
    }

    pub fn entry(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: LineKind::Entry,
            name: name.into(),
        }
    }

    pub fn permission_denied(depth: usize) -> Self {
        Self {
            depth,
            kind: LineKind::PermissionDenied,
            name: String::new(),
        }
    }

    /// Append this line, including its trailing newline, to `output`.
    pub fn write_to(&self, output: &mut String, indent: &str) {
        for _ in 0..self.depth {
            output.push_str(indent);
        }
        match self.kind {
            LineKind::Directory => {
                output.push_str(&self.name);
                output.push('/');
            }
            LineKind::Entry => output.push_str(&self.name),
            LineKind::PermissionDenied => output.push_str(PERMISSION_DENIED_MARKER),
        }
        output.push('\n');
    }

    /// Format this line with the given indent unit.
    pub fn format(&self, indent: &str) -> String {
        let mut output = String::new();
        self.write_to(&mut output, indent);
        output
    }
}
