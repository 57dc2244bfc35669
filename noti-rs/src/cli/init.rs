//! `noti init` implementation.

use crate::cli::args::InitArgs;
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{NotiError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub notes_dir: PathBuf,
    pub config_path: PathBuf,
}

/// Create the notes directory and record it in the config file.
///
/// `notes_dir_override` is the global `--notes-dir` flag; the positional
/// directory wins over it.
pub fn run(
    mut config: Config,
    config_path: Option<&Path>,
    notes_dir_override: Option<&Path>,
    args: &InitArgs,
    output: &Output,
) -> Result<()> {
    let notes_dir = config.resolve_notes_dir(args.dir.as_deref().or(notes_dir_override))?;
    std::fs::create_dir_all(&notes_dir)?;

    let config_path = match config_path {
        Some(p) => p.to_path_buf(),
        None => Config::default_path()
            .ok_or_else(|| NotiError::Config("could not determine home directory".to_string()))?,
    };

    config.notes_dir = notes_dir.clone();
    config.save(&config_path)?;

    if output.is_structured() {
        return output.print(&InitResponse {
            notes_dir,
            config_path,
        });
    }

    if output.is_quiet() {
        output.print_raw(&notes_dir.display().to_string());
        return Ok(());
    }

    output.print_raw(&format!("Initialized notes directory at: {}", notes_dir.display()));
    output.print_raw(&format!("\nConfiguration saved to: {}", config_path.display()));
    output.print_raw("\nYou can now create notes with: noti new \"My First Note\"");
    Ok(())
}
