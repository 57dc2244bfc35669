//! `noti new` implementation.

use crate::cli::args::NewArgs;
use crate::cli::git::auto_commit;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::Result;
use crate::store::NoteStore;

pub fn run(store: &NoteStore, config: &Config, args: &NewArgs, output: &Output) -> Result<()> {
    let folder = args
        .folder
        .as_deref()
        .filter(|f| !f.is_empty())
        .unwrap_or(config.default_folder.as_str());

    let tags = if args.tags.is_empty() {
        config.default_tags.clone()
    } else {
        args.tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    };

    let note = store.create(&args.title, folder, tags)?;
    auto_commit(store, config, &format!("Add note: {}", note.slug), output);

    if output.is_structured() {
        return output.print(&note);
    }

    if output.is_quiet() {
        output.print_raw(&note.file_path.display().to_string());
        return Ok(());
    }

    output.print_raw(&format!("Created note: {}", note.title));
    output.print_raw(&format!("  slug: {}", note.slug));
    output.print_raw(&format!("  path: {}", note.file_path.display()));
    Ok(())
}
