//! Subcommand implementations

pub mod languages;
pub mod render;
pub mod save;

use crate::cli::TreeArgs;
use crate::config::{validate_indent, Config};
use crate::error::ConfigError;
use crate::render::RenderOptions;

/// Render options from the configuration, overridden by command-line flags.
pub fn render_options(args: &TreeArgs, config: &Config) -> Result<RenderOptions, ConfigError> {
    let mut options = config.render_options();
    if let Some(indent) = &args.indent {
        validate_indent(indent)?;
        options = options.with_indent(indent.clone());
    }
    if args.no_follow_links {
        options = options.with_follow_links(false);
    }
    Ok(options)
}
