use std::fs;
use std::io;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use walkdir::WalkDir;

use crate::error::RenderError;

use super::line::TreeLine;
use super::options::RenderOptions;

/// Renders directory subtrees as indented text listings.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    options: RenderOptions,
}

impl TreeRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Lazily walk `root`, producing one line per entry in depth-first order.
    ///
    /// Children are visited in ascending byte order of their names. Every call
    /// starts a fresh walk of the filesystem.
    pub fn lines(&self, root: &Path) -> Result<TreeLines, RenderError> {
        let metadata = fs::metadata(root).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
                RenderError::NotADirectory(root.to_path_buf())
            }
            _ => RenderError::Unreadable {
                path: root.to_path_buf(),
                source: e,
            },
        })?;

        if !metadata.is_dir() {
            return Err(RenderError::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(self.options.follow_links)
            .sort_by_file_name()
            .into_iter();

        Ok(TreeLines {
            root: root.to_path_buf(),
            walker,
            last_dir: None,
            done: false,
        })
    }

    /// Render the whole subtree under `root` into a single string.
    pub fn render(&self, root: &Path) -> Result<String, RenderError> {
        tracing::debug!(path = %root.display(), "Rendering tree");

        let mut output = String::new();
        let mut count = 0usize;
        for line in self.lines(root)? {
            line?.write_to(&mut output, &self.options.indent);
            count += 1;
        }

        tracing::debug!(path = %root.display(), lines = count, "Rendered tree");
        Ok(output)
    }
}

/// Render `root` with the default indent and symlink handling.
pub fn render(root: &Path) -> Result<String, RenderError> {
    TreeRenderer::default().render(root)
}

/// Iterator over the lines of a rendered tree.
///
/// Yields at most one error, after which it is exhausted.
pub struct TreeLines {
    root: PathBuf,
    walker: walkdir::IntoIter,
    /// Most recently emitted directory and its depth
    last_dir: Option<(PathBuf, usize)>,
    done: bool,
}

impl TreeLines {
    fn depth_of(&self, path: &Path) -> usize {
        path.strip_prefix(&self.root)
            .map(|rel| rel.components().count())
            .unwrap_or(0)
    }

    /// Turn a walk error into a line where the failure is local to one entry.
    fn recover(&mut self, err: walkdir::Error) -> Result<TreeLine, RenderError> {
        let Some(path) = err.path().map(Path::to_path_buf) else {
            // Failure while iterating an open directory listing
            let path = self
                .last_dir
                .as_ref()
                .map(|(dir, _)| dir.clone())
                .unwrap_or_else(|| self.root.clone());
            return Err(unreadable(path, err));
        };

        if err.loop_ancestor().is_some() {
            tracing::warn!(path = %path.display(), "Symlink loop, not descending");
            return Ok(TreeLine::entry(self.depth_of(&path), entry_name(&path)));
        }

        if let Some((dir, depth)) = &self.last_dir {
            if *dir == path {
                let depth = *depth;
                if err.io_error().map(io::Error::kind) == Some(io::ErrorKind::PermissionDenied) {
                    tracing::warn!(path = %path.display(), "Permission denied");
                    return Ok(TreeLine::permission_denied(depth + 1));
                }
                return Err(unreadable(path, err));
            }
        }

        // The entry exists in its parent listing but cannot be inspected,
        // e.g. a dangling symlink.
        tracing::debug!(path = %path.display(), error = %err, "Listing entry as leaf");
        Ok(TreeLine::entry(self.depth_of(&path), entry_name(&path)))
    }
}

impl Iterator for TreeLines {
    type Item = Result<TreeLine, RenderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = match self.walker.next() {
            None => {
                self.done = true;
                return None;
            }
            Some(Ok(entry)) => {
                let depth = entry.depth();
                if entry.file_type().is_dir() {
                    self.last_dir = Some((entry.path().to_path_buf(), depth));
                    let name = if depth == 0 {
                        root_name(&self.root)
                    } else {
                        entry.file_name().to_string_lossy().into_owned()
                    };
                    Ok(TreeLine::directory(depth, name))
                } else {
                    Ok(TreeLine::entry(
                        depth,
                        entry.file_name().to_string_lossy().into_owned(),
                    ))
                }
            }
            Some(Err(err)) => self.recover(err),
        };

        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}

impl FusedIterator for TreeLines {}

/// Display name of the walk root: its last component, or the path itself
/// (minus trailing separators) for `.`, `..` and `/`.
pub fn root_name(root: &Path) -> String {
    match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => root
            .to_string_lossy()
            .trim_end_matches(MAIN_SEPARATOR)
            .to_string(),
    }
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn unreadable(path: PathBuf, err: walkdir::Error) -> RenderError {
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "directory walk failed"));
    RenderError::Unreadable { path, source }
}
