//! Full-text search across notes.

pub mod matcher;
pub mod types;

pub use matcher::{context_window, find_by_name, match_note, search_notes};
pub use types::*;
