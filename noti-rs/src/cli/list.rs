//! List command implementation.

use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::note::Note;
use crate::store::{NoteFilter, NoteStore, SkippedNote};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub notes: Vec<Note>,
    pub total: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedNote>,
}

pub fn run(store: &NoteStore, args: &ListArgs, output: &Output) -> Result<()> {
    let filter = NoteFilter::new(args.folder.as_deref(), args.tag.as_deref());
    let listing = store.enumerate(&filter)?;

    if output.is_structured() {
        return output.print(&ListResponse {
            total: listing.notes.len(),
            notes: listing.notes,
            skipped: listing.skipped,
        });
    }

    if output.is_quiet() {
        for note in &listing.notes {
            output.print_raw(&note.slug);
        }
        return Ok(());
    }

    for skipped in &listing.skipped {
        output.warn(&format!("skipped {}: {}", skipped.path.display(), skipped.reason));
    }

    if listing.notes.is_empty() {
        output.print_raw("No notes found");
        return Ok(());
    }

    output.print_raw(&format!("Found {} note(s):\n", listing.notes.len()));
    for note in &listing.notes {
        output.print_raw(&describe(note));
    }
    Ok(())
}

/// Multi-line human summary of a note.
pub fn describe(note: &Note) -> String {
    let mut lines = vec![
        format!("  {}", note.title),
        format!("    slug: {}", note.slug),
    ];
    if !note.tags.is_empty() {
        lines.push(format!("    tags: {}", note.tags.join(", ")));
    }
    if !note.folder.is_empty() {
        lines.push(format!("    folder: {}", note.folder));
    }
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn test_describe() {
        let note = Note::new(Path::new("/notes"), "work/standup", "Standup")
            .with_tags(vec!["daily".to_string(), "team".to_string()]);
        assert_eq!(
            describe(&note),
            "  Standup\n    slug: work/standup\n    tags: daily, team\n    folder: work\n"
        );

        let root_note = Note::new(Path::new("/notes"), "inbox", "Inbox");
        assert_eq!(describe(&root_note), "  Inbox\n    slug: inbox\n");
    }
}
