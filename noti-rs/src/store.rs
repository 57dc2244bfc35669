//! The note store: loading, saving and enumerating notes under the notes root.

use crate::error::{NotiError, Result};
use crate::note::{self, Note, NOTE_EXTENSION};
use crate::search::{self, SearchResult};
use crate::stats::{self, FolderCount, TagCount};
use chrono::{DateTime, Utc};
use glob::{glob, Pattern};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Filters applied while enumerating notes. Unset or empty filters match
/// every note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Exact match on the note's folder.
    pub folder: Option<String>,
    /// The note's tags must contain this exact tag.
    pub tag: Option<String>,
}

impl NoteFilter {
    /// Build a filter from optional CLI-style values.
    pub fn new(folder: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            folder: folder.filter(|f| !f.is_empty()).map(str::to_string),
            tag: tag.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn matches(&self, note: &Note) -> bool {
        if let Some(folder) = self.folder.as_deref() {
            if !folder.is_empty() && note.folder != folder {
                return false;
            }
        }

        if let Some(tag) = self.tag.as_deref() {
            if !tag.is_empty() && !note.has_tag(tag) {
                return false;
            }
        }

        true
    }
}

/// A candidate file that enumeration could not turn into a note.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedNote {
    pub path: PathBuf,
    pub reason: String,
}

/// Result of enumerating the notes directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Listing {
    /// Matching notes, sorted by slug.
    pub notes: Vec<Note>,
    /// Files that looked like notes but failed to load.
    pub skipped: Vec<SkippedNote>,
}

/// A directory of markdown notes.
#[derive(Debug, Clone)]
pub struct NoteStore {
    root: PathBuf,
}

impl NoteStore {
    /// Open the notes directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        // Absolute and re-collected, so glob results always strip to a slug.
        let root: PathBuf = std::path::absolute(root.into())?.components().collect();

        if !root.is_dir() {
            return Err(NotiError::NotesDirNotFound(root));
        }

        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute file path for a slug.
    pub fn note_path(&self, slug: &str) -> PathBuf {
        note::slug_to_path(&self.root, slug)
    }

    /// Check if a note exists.
    pub fn exists(&self, slug: &str) -> bool {
        self.note_path(slug).is_file()
    }

    /// Load the note stored at `path`.
    pub fn load(&self, path: &Path) -> Result<Note> {
        let slug = note::path_to_slug(&self.root, path)?;
        self.read_note(&slug, path)
    }

    fn read_note(&self, slug: &str, path: &Path) -> Result<Note> {
        let raw = std::fs::read_to_string(path)?;
        let modified: DateTime<Utc> = std::fs::metadata(path)?.modified()?.into();
        debug!(slug, "loaded note");
        Note::from_source(&self.root, slug, &raw, modified)
    }

    /// Write a note to the file its slug maps to, replacing any existing file.
    pub fn save(&self, note: &Note) -> Result<()> {
        note::validate_slug(&note.slug)?;
        let path = self.note_path(&note.slug);

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, note.render()?)?;
        debug!(slug = %note.slug, path = %path.display(), "saved note");
        Ok(())
    }

    /// Load a note by slug.
    pub fn get(&self, slug: &str) -> Result<Note> {
        note::validate_slug(slug)?;
        let path = self.note_path(slug);
        if !path.is_file() {
            return Err(NotiError::NoteNotFound(slug.to_string()));
        }
        self.read_note(slug, &path)
    }

    /// Delete a note by slug.
    pub fn delete(&self, slug: &str) -> Result<()> {
        note::validate_slug(slug)?;
        let path = self.note_path(slug);
        if !path.is_file() {
            return Err(NotiError::NoteNotFound(slug.to_string()));
        }

        std::fs::remove_file(&path)?;
        debug!(slug, "deleted note");
        Ok(())
    }

    /// Create and immediately save a new note.
    ///
    /// The slug is derived from the title. An existing note with the same slug
    /// is overwritten.
    pub fn create(&self, title: &str, folder: &str, tags: Vec<String>) -> Result<Note> {
        if note::slug_from_title(title, "").is_empty() {
            return Err(NotiError::InvalidTitle(title.to_string()));
        }

        let slug = note::slug_from_title(title, folder);
        note::validate_slug(&slug)?;

        if self.exists(&slug) {
            warn!(slug = %slug, "overwriting existing note");
        }

        let mut note = Note::new(&self.root, slug, title).with_tags(tags);
        note.created = Some(note.modified);

        self.save(&note)?;
        Ok(note)
    }

    /// Walk the notes directory and load every note matching `filter`.
    ///
    /// Hidden files and anything under a hidden directory (including
    /// `.templates`) are ignored. Files that fail to load are reported in
    /// [`Listing::skipped`] rather than failing the walk.
    pub fn enumerate(&self, filter: &NoteFilter) -> Result<Listing> {
        let pattern = format!(
            "{}/**/*.{}",
            Pattern::escape(&self.root.to_string_lossy()),
            NOTE_EXTENSION
        );

        let mut listing = Listing::default();

        for entry in glob(&pattern)? {
            let path = entry?;
            if !path.is_file() {
                continue;
            }

            let slug = note::path_to_slug(&self.root, &path)?;
            if slug.split('/').any(|segment| segment.starts_with('.')) {
                continue;
            }

            match self.read_note(&slug, &path) {
                Ok(note) => {
                    if filter.matches(&note) {
                        listing.notes.push(note);
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable note");
                    listing.skipped.push(SkippedNote {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        listing.notes.sort_by(|a, b| a.slug.cmp(&b.slug));
        debug!(
            notes = listing.notes.len(),
            skipped = listing.skipped.len(),
            "enumerated notes"
        );
        Ok(listing)
    }

    /// Loaded notes matching `filter`, without the skipped-file report.
    pub fn list(&self, filter: &NoteFilter) -> Result<Vec<Note>> {
        Ok(self.enumerate(filter)?.notes)
    }

    /// Full-text search over every note.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let notes = self.list(&NoteFilter::default())?;
        Ok(search::search_notes(&notes, query))
    }

    /// Notes whose slug or title contains `pattern`, ignoring case.
    pub fn find(&self, pattern: &str) -> Result<Vec<Note>> {
        let notes = self.list(&NoteFilter::default())?;
        Ok(search::find_by_name(notes, pattern))
    }

    /// Note counts per folder, including ancestor folders.
    pub fn folder_counts(&self) -> Result<Vec<FolderCount>> {
        let notes = self.list(&NoteFilter::default())?;
        Ok(stats::folder_counts(&notes))
    }

    /// Tag usage counts across all notes.
    pub fn tag_counts(&self) -> Result<Vec<TagCount>> {
        let notes = self.list(&NoteFilter::default())?;
        Ok(stats::tag_counts(&notes))
    }
}
