use crate::backend::{BackendKind, DEFAULT_HELPER_PROGRAM};
use crate::paths;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Failed to write config file '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Which dialog to show errors with (auto, custom, console-only, toolkit, native, helper)
    pub backend: BackendKind,
    /// Never run the external helper program, even where it is the platform default
    pub no_hacky_fallback: bool,
    /// The program run by the helper backend
    pub helper_program: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            backend: BackendKind::Auto,
            no_hacky_fallback: false,
            helper_program: DEFAULT_HELPER_PROGRAM.to_owned(),
        }
    }
}

impl Config {
    pub fn default_config_path() -> Option<PathBuf> {
        paths::default_config_path()
    }

    /// Loads the config from `config_path`, or from the default location when none is given.
    ///
    /// An explicit path must exist. A missing default file just means defaults.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_config_path() {
                Some(p) if p.exists() => p,
                _ => {
                    trace!("No config file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let mut config = Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        trace!("Loaded config from {}", path.display());
        config.config_path = Some(path);
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null rather than an empty mapping
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Save the config to a file
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }

        let header = "# fatalbox Configuration File\n# Selects how fatal errors are shown.\n\n";
        let serialized_config = serde_yaml::to_string(self)?;
        let config_content = format!("{}{}", header, serialized_config);

        fs::write(path, config_content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The backend to build, with `Auto` resolved for this platform.
    pub fn resolved_backend(&self) -> BackendKind {
        self.backend.resolve(self.no_hacky_fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::from_yaml("backend: console-only\n").unwrap();
        assert_eq!(config.backend, BackendKind::ConsoleOnly);
        assert!(!config.no_hacky_fallback);
        assert_eq!(config.helper_program, "zenity");

        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_all_fields() {
        let yaml = "backend: helper\nno_hacky_fallback: true\nhelper_program: kdialog\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.backend, BackendKind::Helper);
        assert!(config.no_hacky_fallback);
        assert_eq!(config.helper_program, "kdialog");
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Config::from_yaml("backend: sdl\n").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            backend: BackendKind::Toolkit,
            no_hacky_fallback: true,
            ..Config::default()
        };
        config.save_to_file(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# fatalbox Configuration File"));
        assert!(!contents.contains("config_path"));

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.backend, BackendKind::Toolkit);
        assert!(loaded.no_hacky_fallback);
        assert_eq!(loaded.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.yaml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_no_hacky_fallback_reaches_resolution() {
        let config = Config {
            no_hacky_fallback: true,
            ..Config::default()
        };
        assert_ne!(config.resolved_backend(), BackendKind::Helper);
        assert_eq!(config.resolved_backend(), BackendKind::Auto.resolve(true));

        let config = Config::from_yaml("backend: helper\nno_hacky_fallback: true\n").unwrap();
        assert_eq!(config.resolved_backend(), BackendKind::ConsoleOnly);
    }
}
