//! Error types and exit codes for noti.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the `noti` binary.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const NOTES_DIR_NOT_FOUND: i32 = 3;
    pub const INVALID_FRONTMATTER: i32 = 5;
    pub const GIT_FAILURE: i32 = 6;
}

/// Main error type for noti operations.
#[derive(Error, Debug)]
pub enum NotiError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Invalid frontmatter in {path}: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("Path {path} is outside the notes directory {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Notes directory not found at: {0} (run `noti init` to create it)")]
    NotesDirNotFound(PathBuf),

    #[error("Invalid note slug: {0:?}")]
    InvalidSlug(String),

    #[error("Title {0:?} does not produce a usable note name")]
    InvalidTitle(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Not a git repository: {0} (use `noti git init` to initialize)")]
    NotARepository(PathBuf),

    #[error("Git repository already exists at: {0}")]
    RepositoryExists(PathBuf),

    #[error("Nothing to commit, working tree clean")]
    NothingToCommit,

    #[error("git {command} failed: {output}")]
    Git { command: String, output: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Error walking notes directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl NotiError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NotiError::NoteNotFound(_) => exit_code::NOTE_NOT_FOUND,
            NotiError::NotesDirNotFound(_) => exit_code::NOTES_DIR_NOT_FOUND,
            NotiError::InvalidFrontmatter { .. } => exit_code::INVALID_FRONTMATTER,
            NotiError::NotARepository(_)
            | NotiError::RepositoryExists(_)
            | NotiError::NothingToCommit
            | NotiError::Git { .. } => exit_code::GIT_FAILURE,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for noti operations.
pub type Result<T> = std::result::Result<T, NotiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(NotiError::NoteNotFound("a".into()).exit_code(), exit_code::NOTE_NOT_FOUND);
        assert_eq!(
            NotiError::InvalidFrontmatter {
                path: PathBuf::from("a.md"),
                message: "bad".into(),
            }
            .exit_code(),
            exit_code::INVALID_FRONTMATTER
        );
        assert_eq!(NotiError::NothingToCommit.exit_code(), exit_code::GIT_FAILURE);
        assert_eq!(NotiError::Config("x".into()).exit_code(), exit_code::GENERAL_ERROR);
    }

    #[test]
    fn test_not_found_message() {
        let err = NotiError::NoteNotFound("work/standup".into());
        assert_eq!(err.to_string(), "Note not found: work/standup");
    }
}
