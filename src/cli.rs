use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Treescribe - render a directory subtree as an indented text listing
#[derive(Parser, Debug)]
#[command(name = "treescribe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the directory listing
    Render(RenderArgs),

    /// Write the directory listing to a file
    Save(SaveArgs),

    /// List the available interface languages
    Languages(LanguagesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print a man page
    Man,
}

/// Options shared by every command that renders a tree.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Indent unit repeated once per depth level
    #[arg(short, long, value_name = "STR")]
    pub indent: Option<String>,

    /// Do not descend into symlinked directories
    #[arg(long)]
    pub no_follow_links: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Save with a .md extension instead of .txt
    #[arg(short, long)]
    pub markdown: bool,

    /// Output file (defaults to <NAME>_tree.<EXT> in --dest)
    #[arg(short, long, value_name = "FILE", conflicts_with = "dest")]
    pub output: Option<PathBuf>,

    /// Directory to write the default-named file into
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LanguagesArgs {
    /// Language to mark as active (defaults to the configured one)
    #[arg(short, long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
