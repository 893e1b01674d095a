mod option;
mod sort;

pub use option::{LanguageOption, DEFAULT_LANGUAGE};
pub use sort::{sort_key, sort_options};
