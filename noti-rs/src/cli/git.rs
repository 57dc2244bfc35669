//! `noti git` subcommands and automatic commits after edits.

use crate::cli::args::{GitArgs, GitCommands};
use crate::cli::output::Output;
use crate::config::Config;
use crate::error::{NotiError, Result};
use crate::git::{NotesRepo, SyncOutcome};
use crate::store::NoteStore;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
pub struct GitResponse {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncOutcome>,
}

impl GitResponse {
    fn new(action: &str) -> Self {
        Self {
            action: action.to_string(),
            message: None,
            output: None,
            sync: None,
        }
    }

    fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

pub fn run(store: &NoteStore, args: &GitArgs, output: &Output) -> Result<()> {
    let repo = NotesRepo::new(store.root());

    let response = match &args.command {
        GitCommands::Init => {
            repo.init()?;
            GitResponse::new("init").message("Initialized git repository in notes directory")
        }
        GitCommands::Status => {
            let status = repo.status()?;
            if status.trim().is_empty() {
                GitResponse::new("status").message("No changes (working tree clean)")
            } else {
                GitResponse::new("status").output(repo.status_short()?)
            }
        }
        GitCommands::Commit(commit) => {
            repo.commit(&commit.message)?;
            GitResponse::new("commit").message(format!("Committed changes: {}", commit.message))
        }
        GitCommands::Push => {
            repo.push()?;
            GitResponse::new("push").message("Pushed commits to remote")
        }
        GitCommands::Pull => {
            repo.pull()?;
            GitResponse::new("pull").message("Pulled changes from remote")
        }
        GitCommands::Sync(sync) => {
            let outcome = repo.sync(sync.message.as_deref())?;
            let mut response = GitResponse::new("sync").message(describe_sync(&outcome));
            response.sync = Some(outcome);
            response
        }
        GitCommands::Log(log) => {
            let history = match repo.log(log.count) {
                Ok(history) => history,
                // A repository without commits makes `git log` fail.
                Err(NotiError::Git { .. }) => String::new(),
                Err(e) => return Err(e),
            };
            if history.trim().is_empty() {
                GitResponse::new("log").message("No commits yet")
            } else {
                GitResponse::new("log").output(history.trim_end())
            }
        }
    };

    if output.is_structured() {
        return output.print(&response);
    }

    if let Some(text) = &response.output {
        output.print_raw(text);
    } else if let Some(message) = &response.message {
        output.info(message);
    }
    Ok(())
}

fn describe_sync(outcome: &SyncOutcome) -> String {
    let mut steps = Vec::new();
    if outcome.committed {
        steps.push("committed");
    }
    if outcome.pulled {
        steps.push("pulled");
    }
    if outcome.pushed {
        steps.push("pushed");
    }

    if steps.is_empty() {
        "Sync completed (nothing to do)".to_string()
    } else {
        format!("Sync completed ({})", steps.join(", "))
    }
}

/// Commit (and push, if configured) after a note was created or deleted.
///
/// The note change has already happened, so failures are reported as
/// warnings instead of failing the command.
pub fn auto_commit(store: &NoteStore, config: &Config, message: &str, output: &Output) {
    if !config.git_auto_commit {
        return;
    }

    let repo = NotesRepo::new(store.root());
    if let Err(e) = repo.auto_commit(message, config.git_auto_push) {
        warn!(error = %e, "automatic commit failed");
        output.warn(&format!("automatic commit failed: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_sync() {
        assert_eq!(
            describe_sync(&SyncOutcome::default()),
            "Sync completed (nothing to do)"
        );
        assert_eq!(
            describe_sync(&SyncOutcome {
                committed: true,
                pulled: true,
                pushed: true,
            }),
            "Sync completed (committed, pulled, pushed)"
        );
    }
}
