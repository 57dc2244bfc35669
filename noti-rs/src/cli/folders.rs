//! `noti folders` implementation.

use crate::cli::args::FoldersArgs;
use crate::cli::output::{plural, Output};
use crate::error::Result;
use crate::stats::FolderCount;
use crate::store::NoteStore;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FoldersResponse {
    pub folders: Vec<FolderCount>,
    pub total: usize,
}

pub fn run(store: &NoteStore, args: &FoldersArgs, output: &Output) -> Result<()> {
    let folders = store.folder_counts()?;

    if output.is_structured() {
        return output.print(&FoldersResponse {
            total: folders.len(),
            folders,
        });
    }

    if output.is_quiet() {
        for folder in &folders {
            output.print_raw(&folder.path);
        }
        return Ok(());
    }

    if folders.is_empty() {
        output.print_raw("No folders found (all notes in root)");
        return Ok(());
    }

    output.print_raw(&format!("Found {} folder(s):\n", folders.len()));
    let lines = if args.tree {
        tree_lines(&folders)
    } else {
        flat_lines(&folders)
    };
    for line in lines {
        output.print_raw(&line);
    }
    Ok(())
}

fn flat_lines(folders: &[FolderCount]) -> Vec<String> {
    folders
        .iter()
        .map(|f| format!("  {:<30} ({})", f.path, plural(f.count, "note")))
        .collect()
}

/// Folders are sorted by path, so parents come right before their children.
fn tree_lines(folders: &[FolderCount]) -> Vec<String> {
    folders
        .iter()
        .map(|f| format!("{}{}/ ({})", "  ".repeat(f.depth()), f.name(), f.count))
        .collect()
}
