//! `noti show` implementation.

use crate::cli::args::ShowArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &NoteStore, args: &ShowArgs, output: &Output) -> Result<()> {
    let note = store.get(&args.slug)?;

    if output.is_structured() {
        return output.print(&note);
    }

    if output.is_quiet() {
        output.print_raw(&note.file_path.display().to_string());
        return Ok(());
    }

    output.print_raw(note.render()?.trim_end());
    Ok(())
}
