//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noti")]
#[command(author, version, about = "Personal markdown notes from the command line", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/noti/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Notes directory (overrides config)
    #[arg(long, global = true)]
    pub notes_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Print only slugs or paths
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the notes directory and save the config
    Init(InitArgs),

    /// Create a new note
    New(NewArgs),

    /// List notes
    #[command(alias = "ls")]
    List(ListArgs),

    /// Print a note
    Show(ShowArgs),

    /// Delete a note
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Search titles, tags and content
    Search(SearchArgs),

    /// Find notes by name
    Find(FindArgs),

    /// List folders with note counts
    Folders(FoldersArgs),

    /// List tags with usage counts
    Tags(TagsArgs),

    /// Version control for the notes directory
    Git(GitArgs),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Notes directory to create (default: from config)
    pub dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Folder to place the note in
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Tags (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only notes directly in this folder
    #[arg(short, long)]
    pub folder: Option<String>,

    /// Only notes with this tag
    #[arg(short, long)]
    pub tag: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Note slug (e.g. work/meeting-notes)
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Note slug (e.g. work/meeting-notes)
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub query: String,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Substring of the note's slug or title (case-insensitive)
    pub pattern: String,
}

#[derive(Args, Debug)]
pub struct FoldersArgs {
    /// Show folders as a tree
    #[arg(long)]
    pub tree: bool,
}

#[derive(Args, Debug)]
pub struct TagsArgs {
    /// Omit usage counts
    #[arg(long)]
    pub no_counts: bool,
}

#[derive(Args, Debug)]
pub struct GitArgs {
    #[command(subcommand)]
    pub command: GitCommands,
}

#[derive(Subcommand, Debug)]
pub enum GitCommands {
    /// Initialize a repository in the notes directory
    Init,

    /// Show working tree status
    Status,

    /// Stage and commit all changes
    Commit(CommitArgs),

    /// Push commits to the remote
    Push,

    /// Pull changes from the remote
    Pull,

    /// Commit, pull, then push
    Sync(SyncArgs),

    /// Show recent commits
    Log(LogArgs),
}

#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message
    #[arg(short, long, default_value = "Update notes")]
    pub message: String,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Commit message for local changes
    #[arg(short, long)]
    pub message: Option<String>,
}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Number of commits to show (0 for all)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_text() {
        let cli = Cli::parse_from(["noti", "list"]);
        assert_eq!(cli.output_format(), OutputFormat::Text);

        let cli = Cli::parse_from(["noti", "list", "--yaml"]);
        assert_eq!(cli.output_format(), OutputFormat::Yaml);
    }

    #[test]
    fn test_new_tags_split_on_commas() {
        let cli = Cli::parse_from(["noti", "new", "Standup", "-f", "work", "-t", "daily,team", "-t", "x"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.title, "Standup");
                assert_eq!(args.folder.as_deref(), Some("work"));
                assert_eq!(args.tags, vec!["daily", "team", "x"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_git_log_count() {
        let cli = Cli::parse_from(["noti", "-v", "-v", "git", "log", "-n", "3"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Git(GitArgs {
                command: GitCommands::Log(args),
            }) => assert_eq!(args.count, 3),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_conflicting_formats_rejected() {
        assert!(Cli::try_parse_from(["noti", "list", "--json", "--yaml"]).is_err());
    }
}
