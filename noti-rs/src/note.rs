//! Note representation and the mapping between file paths and slugs.

use crate::error::{NotiError, Result};
use crate::parser::{self, Frontmatter, FrontmatterSplit};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File extension of note files, without the dot.
pub const NOTE_EXTENSION: &str = "md";

/// A note in the notes directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// Path relative to the notes root, without extension, `/`-separated
    /// (e.g. "work/meeting-notes").
    pub slug: String,

    pub title: String,

    /// Body text after the frontmatter.
    pub content: String,

    /// Tags in authored order, duplicates kept.
    pub tags: Vec<String>,

    /// Creation time from the frontmatter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Last write time of the file when it was loaded. Never persisted.
    pub modified: DateTime<Utc>,

    /// Directory part of the slug; empty at the notes root.
    pub folder: String,

    /// Absolute location of the note file, derived from the slug.
    pub file_path: PathBuf,
}

impl Note {
    /// Create an empty, unsaved note for `slug` under `root`.
    pub fn new(root: &Path, slug: impl Into<String>, title: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            folder: folder_of(&slug).to_string(),
            file_path: slug_to_path(root, &slug),
            slug,
            title: title.into(),
            content: String::new(),
            tags: Vec::new(),
            created: None,
            modified: Utc::now(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Build a note from the raw text of its file.
    ///
    /// Files without frontmatter become notes with an empty title and the
    /// whole text as content. A frontmatter block that is opened but never
    /// closed is rejected.
    pub fn from_source(
        root: &Path,
        slug: &str,
        raw: &str,
        modified: DateTime<Utc>,
    ) -> Result<Self> {
        let file_path = slug_to_path(root, slug);

        if parser::split_frontmatter(raw) == FrontmatterSplit::Unterminated {
            return Err(NotiError::InvalidFrontmatter {
                path: file_path,
                message: "frontmatter block is never closed".to_string(),
            });
        }

        let (header, content) = parser::decode_with_path(raw, &file_path)?;
        let header = header.unwrap_or_default();

        Ok(Self {
            slug: slug.to_string(),
            title: header.title,
            content,
            tags: header.tags,
            created: header.created,
            modified,
            folder: folder_of(slug).to_string(),
            file_path,
        })
    }

    /// The persisted part of the note's metadata.
    pub fn frontmatter(&self) -> Frontmatter {
        Frontmatter {
            title: self.title.clone(),
            tags: self.tags.clone(),
            created: self.created,
        }
    }

    /// Render the full file text (frontmatter plus content).
    pub fn render(&self) -> Result<String> {
        parser::encode(&self.frontmatter(), &self.content)
    }

    /// Whether the note carries exactly this tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Compute the slug of a note file under `root`.
pub fn path_to_slug(root: &Path, path: &Path) -> Result<String> {
    let outside = || NotiError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };

    let relative = path.strip_prefix(root).map_err(|_| outside())?;
    let relative = if relative.extension() == Some(OsStr::new(NOTE_EXTENSION)) {
        relative.with_extension("")
    } else {
        relative.to_path_buf()
    };

    let slug = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if slug.is_empty() {
        return Err(outside());
    }
    Ok(slug)
}

/// Absolute file path of the note with this slug.
pub fn slug_to_path(root: &Path, slug: &str) -> PathBuf {
    root.join(format!("{}.{}", slug, NOTE_EXTENSION))
}

/// Folder part of a slug, or "" for notes at the root.
pub fn folder_of(slug: &str) -> &str {
    slug.rsplit_once('/').map(|(folder, _)| folder).unwrap_or("")
}

/// Check that a slug names a file inside the notes root.
pub fn validate_slug(slug: &str) -> Result<()> {
    let valid = !slug.is_empty()
        && slug
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

    if valid {
        Ok(())
    } else {
        Err(NotiError::InvalidSlug(slug.to_string()))
    }
}

/// Derive a slug from a title, placed in `folder` when non-empty.
///
/// Lower-cases, turns spaces into hyphens and drops everything that is not
/// an ASCII letter, digit or hyphen. Different titles can map to the same
/// slug.
pub fn slug_from_title(title: &str, folder: &str) -> String {
    let name: String = title
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect();

    if folder.is_empty() {
        name
    } else {
        format!("{}/{}", folder, name)
    }
}
