//! Database location settings.
//!
//! Priority: --database flag > $DBEXAMPLE_DATABASE > config file > default.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub(crate) const DATABASE_ENV_VAR: &str = "DBEXAMPLE_DATABASE";

pub(crate) const DEFAULT_DATABASE: &str = "lesson22.db";

/// Where the database path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatabaseSource {
    Flag,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl fmt::Display for DatabaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--database"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub database: PathBuf,
    pub source: DatabaseSource,
}

/// TOML config file format.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    database: Option<DatabaseConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct DatabaseConfig {
    path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the flag, the environment and the config file.
    pub(crate) fn resolve(flag: Option<PathBuf>) -> Self {
        let env = std::env::var_os(DATABASE_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let file = config_path().and_then(|p| load_config_file(&p));

        let settings = Self::from_sources(flag, env, file);
        log::debug!(
            "Using database {} (from {})",
            settings.database.display(),
            settings.source,
        );
        settings
    }

    fn from_sources(flag: Option<PathBuf>, env: Option<PathBuf>, file: Option<ConfigFile>) -> Self {
        let from_file = file.and_then(|c| c.database).and_then(|d| d.path);

        let (database, source) = if let Some(path) = flag {
            (path, DatabaseSource::Flag)
        } else if let Some(path) = env {
            (path, DatabaseSource::EnvVar(DATABASE_ENV_VAR))
        } else if let Some(path) = from_file {
            (path, DatabaseSource::ConfigFile)
        } else {
            (PathBuf::from(DEFAULT_DATABASE), DatabaseSource::Default)
        };

        Self { database, source }
    }
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dbexample").join("config.toml"))
}

fn load_config_file(path: &Path) -> Option<ConfigFile> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            return None;
        }
    };
    match parse_config(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring malformed config file {}: {}", path.display(), e);
            None
        }
    }
}

fn parse_config(content: &str) -> Result<ConfigFile, toml::de::Error> {
    toml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(path: &str) -> ConfigFile {
        parse_config(&format!("[database]\npath = \"{}\"\n", path)).unwrap()
    }

    #[test]
    fn flag_wins() {
        let s = Settings::from_sources(
            Some(PathBuf::from("flag.db")),
            Some(PathBuf::from("env.db")),
            Some(file_with("file.db")),
        );
        assert_eq!(s.database, PathBuf::from("flag.db"));
        assert_eq!(s.source, DatabaseSource::Flag);
    }

    #[test]
    fn env_beats_config_file() {
        let s = Settings::from_sources(
            None,
            Some(PathBuf::from("env.db")),
            Some(file_with("file.db")),
        );
        assert_eq!(s.database, PathBuf::from("env.db"));
        assert_eq!(s.source, DatabaseSource::EnvVar(DATABASE_ENV_VAR));
    }

    #[test]
    fn config_file_used_when_nothing_else_set() {
        let s = Settings::from_sources(None, None, Some(file_with("/srv/lesson22.db")));
        assert_eq!(s.database, PathBuf::from("/srv/lesson22.db"));
        assert_eq!(s.source, DatabaseSource::ConfigFile);
    }

    #[test]
    fn default_when_config_has_no_path() {
        let config = parse_config("[database]\n").unwrap();
        let s = Settings::from_sources(None, None, Some(config));
        assert_eq!(s.database, PathBuf::from(DEFAULT_DATABASE));
        assert_eq!(s.source, DatabaseSource::Default);
    }

    #[test]
    fn unknown_sections_are_ignored() {
        let config = parse_config("[other]\nkey = 1\n").unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn malformed_config_is_rejected() {
        assert!(parse_config("[database\npath = ").is_err());
    }

    #[test]
    fn missing_config_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config_file(&dir.path().join("config.toml")).is_none());
    }

    #[test]
    fn config_file_loaded_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database]\npath = \"disk.db\"\n").unwrap();

        let config = load_config_file(&path).unwrap();
        let s = Settings::from_sources(None, None, Some(config));
        assert_eq!(s.database, PathBuf::from("disk.db"));
    }

    #[test]
    fn source_display() {
        assert_eq!(
            DatabaseSource::EnvVar(DATABASE_ENV_VAR).to_string(),
            "env $DBEXAMPLE_DATABASE"
        );
        assert_eq!(DatabaseSource::Flag.to_string(), "--database");
    }
}
