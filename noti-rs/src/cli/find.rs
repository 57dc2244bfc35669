//! `noti find` implementation.

use crate::cli::args::FindArgs;
use crate::cli::list::{describe, ListResponse};
use crate::cli::output::Output;
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &NoteStore, args: &FindArgs, output: &Output) -> Result<()> {
    let notes = store.find(&args.pattern)?;

    if output.is_structured() {
        return output.print(&ListResponse {
            total: notes.len(),
            notes,
            skipped: Vec::new(),
        });
    }

    if output.is_quiet() {
        for note in &notes {
            output.print_raw(&note.slug);
        }
        return Ok(());
    }

    if notes.is_empty() {
        output.print_raw(&format!("No notes named like '{}'", args.pattern));
        return Ok(());
    }

    output.print_raw(&format!("Found {} note(s):\n", notes.len()));
    for note in &notes {
        output.print_raw(&describe(note));
    }
    Ok(())
}
