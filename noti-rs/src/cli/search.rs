//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::search::{Match, MatchKind, SearchResult};
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: usize,
}

pub fn run(store: &NoteStore, args: &SearchArgs, output: &Output) -> Result<()> {
    let results = store.search(&args.query)?;

    if output.is_structured() {
        return output.print(&SearchResponse {
            query: args.query.clone(),
            total: results.len(),
            results,
        });
    }

    if output.is_quiet() {
        for result in &results {
            output.print_raw(&result.note.slug);
        }
        return Ok(());
    }

    if results.is_empty() {
        output.print_raw("No matches found");
        return Ok(());
    }

    output.print_raw(&format!(
        "Found {} note(s) matching '{}':\n",
        results.len(),
        args.query
    ));

    for result in &results {
        output.print_raw(&format!("{}\n   slug: {}", result.note.title, result.note.slug));
        if !result.note.tags.is_empty() {
            output.print_raw(&format!("   tags: {}", result.note.tags.join(", ")));
        }
        output.print_raw(&format!("   {} match(es):", result.matches.len()));
        for m in &result.matches {
            output.print_raw(&format!("     - {}", describe_match(m)));
        }
        output.print_raw("");
    }
    Ok(())
}

fn describe_match(m: &Match) -> String {
    match m.kind {
        MatchKind::Title => format!("in title: {}", m.line),
        MatchKind::Tag => format!("in tag: {}", m.line),
        MatchKind::Body => format!("line {}: {}", m.line_number, m.line.trim()),
    }
}
