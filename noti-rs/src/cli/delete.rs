//! `noti delete` implementation.

use crate::cli::args::DeleteArgs;
use crate::cli::git::auto_commit;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub slug: String,
    pub path: String,
    pub message: String,
}

pub fn run(store: &NoteStore, config: &Config, args: &DeleteArgs, output: &Output) -> Result<()> {
    let path = store.note_path(&args.slug);
    store.delete(&args.slug)?;
    auto_commit(store, config, &format!("Delete note: {}", args.slug), output);

    if output.is_structured() {
        return output.print(&DeleteResponse {
            slug: args.slug.clone(),
            path: path.display().to_string(),
            message: "Note deleted".to_string(),
        });
    }

    if output.is_quiet() {
        output.print_raw(&path.display().to_string());
    } else {
        output.print_raw(&format!("Deleted note: {}", args.slug));
    }
    Ok(())
}
