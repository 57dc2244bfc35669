//! User configuration: where the notes live and defaults for new notes.

use crate::error::{NotiError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Contents of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory of the notes.
    pub notes_dir: PathBuf,
    /// Folder used by `noti new` when none is given.
    pub default_folder: String,
    /// Tags used by `noti new` when none are given.
    pub default_tags: Vec<String>,
    /// Commit the notes directory after creating or deleting a note.
    pub git_auto_commit: bool,
    /// Push after an automatic commit.
    pub git_auto_push: bool,
    /// Log level for stderr output (error, warn, info, debug, trace).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: default_notes_dir(),
            default_folder: String::new(),
            default_tags: Vec::new(),
            git_auto_commit: false,
            git_auto_push: false,
            log_level: "warn".to_string(),
        }
    }
}

fn default_notes_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("notes")
}

impl Config {
    /// `~/.config/noti/config.yaml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("noti").join("config.yaml"))
    }

    /// Load config from `path`, or from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content)
            .map_err(|e| NotiError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse config YAML. An empty document yields the defaults.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Write config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// The notes directory to use: the override if given, else the
    /// configured one. Relative paths are resolved against the current
    /// directory.
    pub fn resolve_notes_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        let dir = override_dir.unwrap_or(&self.notes_dir);
        Ok(std::path::absolute(dir)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.notes_dir.ends_with("notes"));
        assert_eq!(config.default_folder, "");
        assert!(config.default_tags.is_empty());
        assert!(!config.git_auto_commit);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = Config::parse("notes_dir: /srv/notes\ndefault_tags: [inbox]\neditor: vim\n").unwrap();
        assert_eq!(config.notes_dir, PathBuf::from("/srv/notes"));
        assert_eq!(config.default_tags, vec!["inbox"]);
        assert_eq!(config.default_folder, "");
        assert!(!config.git_auto_push);
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(Some(&dir.path().join("missing.yaml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "notes_dir: [unclosed\n").unwrap();

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(NotiError::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            notes_dir: dir.path().join("notes"),
            default_folder: "inbox".to_string(),
            default_tags: vec!["todo".to_string()],
            git_auto_commit: true,
            git_auto_push: false,
            log_level: "debug".to_string(),
        };
        config.save(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_resolve_notes_dir() {
        let config = Config {
            notes_dir: PathBuf::from("/configured"),
            ..Config::default()
        };

        assert_eq!(config.resolve_notes_dir(None).unwrap(), PathBuf::from("/configured"));
        assert_eq!(
            config.resolve_notes_dir(Some(Path::new("/override"))).unwrap(),
            PathBuf::from("/override")
        );

        let relative = config.resolve_notes_dir(Some(Path::new("rel"))).unwrap();
        assert!(relative.is_absolute());
        assert!(relative.ends_with("rel"));
    }
}
