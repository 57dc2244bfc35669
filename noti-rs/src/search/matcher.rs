//! Case-insensitive substring matching over notes.

use super::types::{Match, SearchResult};
use crate::note::Note;

/// Search titles, body lines and tags of `notes` for `query`.
///
/// Matching is case-insensitive substring containment. Results keep the
/// order of `notes`; notes without matches are left out.
pub fn search_notes(notes: &[Note], query: &str) -> Vec<SearchResult> {
    let query = query.to_lowercase();

    notes
        .iter()
        .filter_map(|note| {
            let matches = match_note(note, &query);
            if matches.is_empty() {
                None
            } else {
                Some(SearchResult {
                    note: note.clone(),
                    matches,
                })
            }
        })
        .collect()
}

/// All matches of an already lower-cased query within one note.
pub fn match_note(note: &Note, query_lower: &str) -> Vec<Match> {
    let mut matches = Vec::new();

    if note.title.to_lowercase().contains(query_lower) {
        matches.push(Match::title(&note.title));
    }

    // Split on '\n' only: line text is reported exactly as stored.
    let lines: Vec<&str> = note.content.split('\n').collect();
    for (i, line) in lines.iter().enumerate() {
        if line.to_lowercase().contains(query_lower) {
            matches.push(Match::body(i + 1, line, context_window(&lines, i)));
        }
    }

    for tag in &note.tags {
        if tag.to_lowercase().contains(query_lower) {
            matches.push(Match::tag(tag));
        }
    }

    matches
}

/// The line at `index` plus at most one line either side, joined by spaces.
pub fn context_window(lines: &[&str], index: usize) -> String {
    let start = index.saturating_sub(1);
    let end = (index + 2).min(lines.len());
    lines[start..end].join(" ")
}

/// Notes whose slug or title contains `pattern`, ignoring case.
pub fn find_by_name(notes: Vec<Note>, pattern: &str) -> Vec<Note> {
    let pattern = pattern.to_lowercase();
    notes
        .into_iter()
        .filter(|note| {
            note.slug.to_lowercase().contains(&pattern)
                || note.title.to_lowercase().contains(&pattern)
        })
        .collect()
}
