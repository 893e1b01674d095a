//! Treescribe - render a directory subtree as an indented text listing
//!
//! This crate provides functionality for:
//! - Rendering a directory tree as deterministic, indented text
//! - Saving rendered listings to text or markdown files
//! - Ordering the interface language catalog for display

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod language;
pub mod render;

// Re-export commonly used types
pub use config::Config;
pub use error::{RenderError, Result, TreescribeError};
pub use language::{sort_options, LanguageOption};
pub use render::{render, RenderOptions, TreeRenderer};
