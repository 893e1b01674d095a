mod line;
mod options;
mod save;
mod walker;

pub use line::{LineKind, TreeLine, PERMISSION_DENIED_MARKER};
pub use options::{RenderOptions, DEFAULT_INDENT};
pub use save::{default_file_name, save_listing, SaveFormat};
pub use walker::{render, root_name, TreeLines, TreeRenderer};
