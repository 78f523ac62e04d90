pub mod categorize;
pub mod changelog;
pub mod config;
pub mod context;
pub mod error;
pub mod format;
pub mod git;
pub mod output;
pub mod source;
pub mod ui;

pub use error::{ReleaseNotesError, Result};
