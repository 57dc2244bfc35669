//! Git operations on the notes directory, run through the `git` binary.

use crate::error::{NotiError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Commit message used by `sync` when none is given.
pub const DEFAULT_SYNC_MESSAGE: &str = "Auto-sync notes";

/// What a sync actually did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncOutcome {
    pub committed: bool,
    pub pulled: bool,
    pub pushed: bool,
}

/// The notes directory treated as a git working tree.
#[derive(Debug, Clone)]
pub struct NotesRepo {
    root: PathBuf,
}

impl NotesRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the notes directory has its own `.git` directory.
    pub fn is_repo(&self) -> bool {
        self.root.join(".git").is_dir()
    }

    fn ensure_repo(&self) -> Result<()> {
        if self.is_repo() {
            Ok(())
        } else {
            Err(NotiError::NotARepository(self.root.clone()))
        }
    }

    /// Run git in the notes directory and return its stdout.
    fn git(&self, args: &[&str]) -> Result<String> {
        debug!(root = %self.root.display(), ?args, "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotiError::Git {
                command: args.join(" "),
                output: format!("{}{}", stdout, stderr).trim().to_string(),
            });
        }

        Ok(stdout)
    }

    pub fn init(&self) -> Result<()> {
        if self.is_repo() {
            return Err(NotiError::RepositoryExists(self.root.clone()));
        }
        self.git(&["init"])?;
        Ok(())
    }

    /// Machine-readable status; empty when the working tree is clean.
    pub fn status(&self) -> Result<String> {
        self.ensure_repo()?;
        self.git(&["status", "--porcelain"])
    }

    /// One-line-per-file status with the branch header.
    pub fn status_short(&self) -> Result<String> {
        if !self.is_repo() {
            return Ok("not a git repository".to_string());
        }
        Ok(self.git(&["status", "--short", "--branch"])?.trim().to_string())
    }

    /// Stage every change in the notes directory.
    pub fn add_all(&self) -> Result<()> {
        self.ensure_repo()?;
        self.git(&["add", "."])?;
        Ok(())
    }

    /// Stage everything and commit it.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.add_all()?;
        if self.status()?.trim().is_empty() {
            return Err(NotiError::NothingToCommit);
        }
        self.git(&["commit", "-m", message])?;
        Ok(())
    }

    pub fn push(&self) -> Result<()> {
        self.ensure_repo()?;
        self.git(&["push"])?;
        Ok(())
    }

    pub fn pull(&self) -> Result<()> {
        self.ensure_repo()?;
        self.git(&["pull"])?;
        Ok(())
    }

    pub fn has_remote(&self) -> Result<bool> {
        if !self.is_repo() {
            return Ok(false);
        }
        Ok(!self.git(&["remote"])?.trim().is_empty())
    }

    /// Commit local changes if any, then pull, then push if a commit was made.
    ///
    /// Pull and push are skipped when no remote is configured.
    pub fn sync(&self, message: Option<&str>) -> Result<SyncOutcome> {
        self.ensure_repo()?;
        let mut outcome = SyncOutcome::default();

        if !self.status()?.trim().is_empty() {
            self.commit(message.unwrap_or(DEFAULT_SYNC_MESSAGE))?;
            outcome.committed = true;
        }

        if self.has_remote()? {
            self.pull()?;
            outcome.pulled = true;

            if outcome.committed {
                self.push()?;
                outcome.pushed = true;
            }
        }

        Ok(outcome)
    }

    /// One line per commit, newest first. `max_count` of 0 means no limit.
    pub fn log(&self, max_count: usize) -> Result<String> {
        self.ensure_repo()?;
        let limit = format!("-n{}", max_count);
        let mut args = vec!["log", "--oneline", "--decorate"];
        if max_count > 0 {
            args.push(limit.as_str());
        }
        self.git(&args)
    }

    /// Commit (and optionally push) after a note was changed.
    ///
    /// Returns whether a commit was made. Directories that are not
    /// repositories and clean working trees are left alone.
    pub fn auto_commit(&self, message: &str, push: bool) -> Result<bool> {
        if !self.is_repo() {
            return Ok(false);
        }

        match self.commit(message) {
            Ok(()) => {}
            Err(NotiError::NothingToCommit) => return Ok(false),
            Err(e) => return Err(e),
        }

        if push && self.has_remote()? {
            self.push()?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn init_repo(dir: &Path) -> NotesRepo {
        let repo = NotesRepo::new(dir);
        repo.init().unwrap();
        repo.git(&["config", "user.name", "Test"]).unwrap();
        repo.git(&["config", "user.email", "test@example.com"]).unwrap();
        repo.git(&["config", "commit.gpgsign", "false"]).unwrap();
        repo
    }

    #[test]
    fn test_plain_directory_is_not_a_repo() {
        let dir = TempDir::new().unwrap();
        let repo = NotesRepo::new(dir.path());

        assert!(!repo.is_repo());
        assert!(matches!(repo.status(), Err(NotiError::NotARepository(_))));
        assert!(matches!(repo.commit("msg"), Err(NotiError::NotARepository(_))));
        assert!(matches!(repo.log(5), Err(NotiError::NotARepository(_))));
        assert_eq!(repo.status_short().unwrap(), "not a git repository");
        assert!(!repo.has_remote().unwrap());
        assert!(!repo.auto_commit("msg", true).unwrap());
    }

    #[test]
    fn test_init_commit_and_log() {
        if !git_available() {
            return;
        }

        let dir = TempDir::new().unwrap();
        let repo = init_repo(dir.path());
        assert!(repo.is_repo());
        assert!(matches!(repo.init(), Err(NotiError::RepositoryExists(_))));

        std::fs::write(dir.path().join("note.md"), "hello").unwrap();
        assert!(!repo.status().unwrap().trim().is_empty());

        repo.commit("Add note").unwrap();
        assert!(repo.status().unwrap().trim().is_empty());
        assert!(matches!(repo.commit("again"), Err(NotiError::NothingToCommit)));
        assert!(repo.log(10).unwrap().contains("Add note"));
    }

    #[test]
    fn test_sync_and_auto_commit_without_remote() {
        if !git_available() {
            return;
        }

        let dir = TempDir::new().unwrap();
        let repo = init_repo(dir.path());

        std::fs::write(dir.path().join("a.md"), "a").unwrap();
        let outcome = repo.sync(None).unwrap();
        assert_eq!(
            outcome,
            SyncOutcome {
                committed: true,
                pulled: false,
                pushed: false,
            }
        );
        assert!(repo.log(1).unwrap().contains(DEFAULT_SYNC_MESSAGE));

        assert!(!repo.auto_commit("nothing changed", false).unwrap());

        std::fs::write(dir.path().join("b.md"), "b").unwrap();
        assert!(repo.auto_commit("Add b", true).unwrap());
        assert!(repo.log(0).unwrap().contains("Add b"));
    }
}
