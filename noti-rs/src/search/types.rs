//! Result types for full-text search.

use crate::note::Note;
use serde::Serialize;

/// Where in a note a match was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Title,
    Body,
    Tag,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Title => "title",
            MatchKind::Body => "body",
            MatchKind::Tag => "tag",
        }
    }
}

/// A single match within a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// 1-indexed body line; 0 for title and tag matches.
    pub line_number: usize,
    /// The matched title, body line, or tag, as written.
    pub line: String,
    pub kind: MatchKind,
    /// For body matches, the line with its neighbours joined by spaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Match {
    pub fn title(title: &str) -> Self {
        Self {
            line_number: 0,
            line: title.to_string(),
            kind: MatchKind::Title,
            context: None,
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self {
            line_number: 0,
            line: tag.to_string(),
            kind: MatchKind::Tag,
            context: None,
        }
    }

    pub fn body(line_number: usize, line: &str, context: String) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            kind: MatchKind::Body,
            context: Some(context),
        }
    }
}

/// A note with at least one match.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub note: Note,
    /// Title matches, then body matches by line, then tag matches.
    pub matches: Vec<Match>,
}
