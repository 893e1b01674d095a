//! Render command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Result, TreescribeError};
use crate::render::TreeRenderer;

use super::render_options;

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let renderer = TreeRenderer::new(render_options(&args.tree, config)?);

    tracing::info!(path = %args.tree.path.display(), "Rendering directory");
    let listing = renderer.render(&args.tree.path)?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(listing.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| TreescribeError::Io {
            path: PathBuf::from("<stdout>"),
            source: e,
        })?;

    Ok(())
}
