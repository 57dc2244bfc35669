//! noti - a library for managing a directory of markdown notes.
//!
//! # Overview
//!
//! Every note is a `.md` file under a notes root, starting with a small YAML
//! frontmatter block (title, tags, creation time) followed by free text.
//! noti provides:
//! - Frontmatter encoding and decoding
//! - Slugs derived from file paths (and from titles for new notes)
//! - Creating, loading, listing, and deleting notes
//! - Case-insensitive full-text search over titles, tags, and body lines
//! - Folder and tag summaries
//! - Git integration for the notes directory
//!
//! # Example
//!
//! ```no_run
//! use noti::{NoteFilter, NoteStore};
//!
//! let store = NoteStore::new("/path/to/notes").unwrap();
//!
//! // Create a note in the "work" folder
//! let note = store.create("Meeting Notes", "work", vec!["urgent".into()]).unwrap();
//! assert_eq!(note.slug, "work/meeting-notes");
//!
//! // List notes tagged "urgent"
//! for note in store.list(&NoteFilter::default().tag("urgent")).unwrap() {
//!     println!("{}: {}", note.slug, note.title);
//! }
//!
//! // Search everything
//! for result in store.search("agenda").unwrap() {
//!     println!("{} ({} matches)", result.note.slug, result.matches.len());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod note;
pub mod parser;
pub mod search;
pub mod stats;
pub mod store;

// Re-export main types at crate root
pub use config::Config;
pub use error::{NotiError, Result};
pub use git::NotesRepo;
pub use note::Note;
pub use parser::Frontmatter;
pub use search::{Match, MatchKind, SearchResult};
pub use stats::{FolderCount, TagCount};
pub use store::{Listing, NoteFilter, NoteStore, SkippedNote};
