//! Save command implementation

use std::path::PathBuf;

use crate::cli::SaveArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render::{default_file_name, save_listing, SaveFormat, TreeRenderer};

use super::render_options;

/// Where the listing for `args` is written.
pub fn target_path(args: &SaveArgs, config: &Config) -> PathBuf {
    if let Some(output) = &args.output {
        return output.clone();
    }

    let format = if args.markdown {
        SaveFormat::Markdown
    } else {
        config.ui.save_format
    };
    let dest = args.dest.clone().unwrap_or_else(|| PathBuf::from("."));
    dest.join(default_file_name(&args.tree.path, format))
}

/// Run the save command
pub fn run(args: SaveArgs, config: &Config) -> Result<()> {
    let renderer = TreeRenderer::new(render_options(&args.tree, config)?);
    let target = target_path(&args, config);

    tracing::info!(
        path = %args.tree.path.display(),
        target = %target.display(),
        "Saving directory listing"
    );

    let listing = renderer.render(&args.tree.path)?;
    let saved = save_listing(&args.tree.path, &listing, &target)?;

    println!("Saved listing to {}", saved.display());
    Ok(())
}
