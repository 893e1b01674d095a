//! Languages command implementation

use crate::cli::LanguagesArgs;
use crate::config::Config;
use crate::error::{Result, TreescribeError};
use crate::language::{sort_options, LanguageOption};

const ACTIVE_MARK: &str = "✓ ";
const INACTIVE_MARK: &str = "  ";

/// Sorted language menu with the active entry marked.
pub fn format_menu(options: &[LanguageOption], active: &str) -> String {
    let mut output = String::new();
    for option in options {
        let mark = if option.code == active {
            ACTIVE_MARK
        } else {
            INACTIVE_MARK
        };
        output.push_str(&format!("{}{} ({})\n", mark, option.display_name, option.code));
    }
    output
}

/// Run the languages command
pub fn run(args: LanguagesArgs, config: &Config) -> Result<()> {
    let active = args.lang.as_deref().unwrap_or(&config.ui.language);
    if LanguageOption::find(active).is_none() {
        return Err(TreescribeError::UnknownLanguage(active.to_string()));
    }

    let options = sort_options(&LanguageOption::catalog());
    tracing::debug!(active, count = options.len(), "Listing languages");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
    } else {
        print!("{}", format_menu(&options, active));
    }

    Ok(())
}
