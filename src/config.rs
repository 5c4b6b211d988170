//! Configuration for the planner window.
//!
//! Priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env`)
//! 3. TOML config file (`<config dir>/task-planner/config.toml`)
//! 4. Compiled defaults
//!
//! A missing default config file is not an error; a missing `--config`
//! file is.

use std::path::{Path, PathBuf};

use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("invalid backend url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Top-level TOML file structure. Every field is optional.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    backend: BackendFileConfig,
    logging: LoggingFileConfig,
}

/// `[backend]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct BackendFileConfig {
    url: Option<String>,
}

/// `[logging]` section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LoggingFileConfig {
    level: Option<String>,
}

#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Enter tasks and submit them to a scheduling backend")]
pub struct CliArgs {
    /// Endpoint the task list is POSTed to.
    #[arg(short, long, env = "TASK_BACKEND_URL")]
    pub backend_url: Option<String>,

    /// Path to config file (default: `<config dir>/task-planner/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TASK_PLANNER_LOG")]
    pub log_level: Option<String>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend endpoint; `None` leaves submission disabled.
    pub backend_url: Option<Url>,
    pub log_level: String,
    /// Directory holding the default config file, if the platform has one.
    pub config_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            log_level: "info".to_string(),
            config_dir: default_config_dir(),
        }
    }
}

impl AppConfig {
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Self::resolve(cli, &file)
    }

    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let backend_url = cli
            .backend_url
            .as_deref()
            .or(file.backend.url.as_deref())
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_url)
            .transpose()?;

        Ok(Self {
            backend_url,
            log_level: cli
                .log_level
                .clone()
                .or_else(|| file.logging.level.clone())
                .unwrap_or(defaults.log_level),
            config_dir: defaults.config_dir,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

fn default_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "task-planner").map(|d| d.config_dir().to_path_buf())
}

fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(dir) = default_config_dir() else {
            return Ok(ConfigFile::default());
        };
        dir.join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        let config = AppConfig::resolve(&CliArgs::default(), &file).unwrap();
        assert!(config.backend_url.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn file_values_are_used() {
        let file: ConfigFile = toml::from_str(
            r#"
[backend]
url = "http://localhost:8080/schedule"

[logging]
level = "debug"
"#,
        )
        .unwrap();
        let config = AppConfig::resolve(&CliArgs::default(), &file).unwrap();
        assert_eq!(
            config.backend_url.unwrap().as_str(),
            "http://localhost:8080/schedule"
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn cli_overrides_file() {
        let file: ConfigFile = toml::from_str(
            r#"
[backend]
url = "http://localhost:8080/schedule"
"#,
        )
        .unwrap();
        let cli = CliArgs {
            backend_url: Some("https://planner.example.com/api/tasks".to_string()),
            log_level: Some("warn".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, &file).unwrap();
        assert_eq!(
            config.backend_url.unwrap().as_str(),
            "https://planner.example.com/api/tasks"
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn blank_url_means_unconfigured() {
        let cli = CliArgs {
            backend_url: Some("  ".to_string()),
            ..Default::default()
        };
        let config = AppConfig::resolve(&cli, &ConfigFile::default()).unwrap();
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn malformed_url_is_an_error() {
        let cli = CliArgs {
            backend_url: Some("not a url".to_string()),
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, &ConfigFile::default());
        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn explicit_missing_config_file_returns_error() {
        let result = load_config_file(Some(Path::new("/nonexistent/task-planner.toml")));
        assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let result: Result<ConfigFile, _> = toml::from_str("[backend\nurl = 1");
        assert!(result.is_err());
    }
}
