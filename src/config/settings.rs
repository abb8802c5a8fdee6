//! Configuration file loading and default values.

use crate::domain::urgency::Urgency;
use crate::error::TodoError;
use colored::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "TODO_CONFIG";
/// Environment variable overriding the backing file location.
pub const DATA_FILE_ENV: &str = "TODO_DATA_FILE";

/// Widest id column accepted from the config file.
pub const MAX_ID_WIDTH: usize = 20;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub colors: ColorConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub file: String,
}

/// Display color per urgency level.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub normal: String,
    pub urgent: String,
    pub chill: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub id_width: usize,
    pub sort: SortOrder,
}

/// Order in which todos are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending id.
    #[default]
    Id,
    /// Urgent first, then normal, then chill; ties by id.
    Urgency,
    /// As stored in the backing file.
    #[serde(rename = "none")]
    Unsorted,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: "~/.todos.json".to_string(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            normal: "blue".to_string(),
            urgent: "red".to_string(),
            chill: "green".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            id_width: crate::domain::todo::DEFAULT_ID_WIDTH,
            sort: SortOrder::Id,
        }
    }
}

impl ColorConfig {
    fn name_for(&self, urgency: Urgency) -> &str {
        match urgency {
            Urgency::Normal => &self.normal,
            Urgency::Urgent => &self.urgent,
            Urgency::Chill => &self.chill,
        }
    }
}

impl Config {
    /// Load configuration from the environment:
    /// env vars > config file > defaults.
    pub fn from_env() -> Result<Self, TodoError> {
        let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let data_file = std::env::var(DATA_FILE_ENV).ok().filter(|s| !s.is_empty());
        Self::load(config_path.as_deref(), data_file.as_deref())
    }

    /// Load configuration from `config_path` (or the default location),
    /// then apply the data file override.
    pub fn load(config_path: Option<&Path>, data_file: Option<&str>) -> Result<Self, TodoError> {
        let path = config_path.map(PathBuf::from).unwrap_or_else(default_config_path);

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| TodoError::ConfigError(format!("{}: {e}", path.display())))?;
            toml::from_str::<Config>(&content)
                .map_err(|e| TodoError::ConfigError(format!("{}: {e}", path.display())))?
        } else {
            Config::default()
        };

        if let Some(file) = data_file {
            config.data.file = file.to_string();
        }

        config.validate()?;
        tracing::debug!(config = %path.display(), data_file = %config.data.file, "configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), TodoError> {
        for urgency in Urgency::ALL {
            let name = self.colors.name_for(urgency);
            if name.parse::<Color>().is_err() {
                return Err(TodoError::ConfigError(format!(
                    "unknown color \"{name}\" for urgency level {urgency}"
                )));
            }
        }
        if self.display.id_width > MAX_ID_WIDTH {
            return Err(TodoError::ConfigError(format!(
                "display.id_width must be at most {MAX_ID_WIDTH}, got {}",
                self.display.id_width
            )));
        }
        if self.data.file.is_empty() {
            return Err(TodoError::ConfigError("data.file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Resolve the backing file path, expanding `~`.
    pub fn data_file(&self) -> PathBuf {
        expand_tilde(&self.data.file)
    }

    /// The display color bound to an urgency level.
    pub fn color_for(&self, urgency: Urgency) -> Color {
        Color::from(self.colors.name_for(urgency))
    }
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("todo")
        .join("config.toml")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_colors() {
        let cfg = Config::default();
        assert_eq!(cfg.color_for(Urgency::Normal), Color::Blue);
        assert_eq!(cfg.color_for(Urgency::Urgent), Color::Red);
        assert_eq!(cfg.color_for(Urgency::Chill), Color::Green);
    }

    #[test]
    fn default_display() {
        let cfg = Config::default();
        assert!(cfg.display.color);
        assert_eq!(cfg.display.id_width, 5);
        assert_eq!(cfg.display.sort, SortOrder::Id);
    }

    #[test]
    fn default_data_file_is_under_home() {
        let cfg = Config::default();
        assert_eq!(cfg.data.file, "~/.todos.json");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(cfg.data_file(), home.join(".todos.json"));
        }
    }

    #[test]
    fn parse_partial_toml() {
        let cfg: Config = toml::from_str(
            r#"
[colors]
urgent = "magenta"
"#,
        )
        .unwrap();
        assert_eq!(cfg.color_for(Urgency::Urgent), Color::Magenta);
        assert_eq!(cfg.color_for(Urgency::Normal), Color::Blue);
        assert_eq!(cfg.display.id_width, 5);
    }

    #[test]
    fn parse_full_toml() {
        let cfg: Config = toml::from_str(
            r#"
[data]
file = "/tmp/todos.json"

[colors]
normal = "cyan"
urgent = "yellow"
chill = "white"

[display]
color = false
id_width = 3
sort = "urgency"
"#,
        )
        .unwrap();
        assert_eq!(cfg.data_file(), PathBuf::from("/tmp/todos.json"));
        assert!(!cfg.display.color);
        assert_eq!(cfg.display.id_width, 3);
        assert_eq!(cfg.display.sort, SortOrder::Urgency);
    }

    #[test]
    fn parse_sort_none() {
        let cfg: Config = toml::from_str("[display]\nsort = \"none\"\n").unwrap();
        assert_eq!(cfg.display.sort, SortOrder::Unsorted);
    }

    #[test]
    fn load_nonexistent_config_returns_default() {
        let cfg = Config::load(Some(Path::new("/nonexistent/config.toml")), None).unwrap();
        assert_eq!(cfg.data.file, "~/.todos.json");
    }

    #[test]
    fn data_file_override() {
        let cfg = Config::load(
            Some(Path::new("/nonexistent/config.toml")),
            Some("/tmp/other.json"),
        )
        .unwrap();
        assert_eq!(cfg.data_file(), PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nid_width = 2\n").unwrap();
        let cfg = Config::load(Some(&path), None).unwrap();
        assert_eq!(cfg.display.id_width, 2);
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, TodoError::ConfigError(_)));
    }

    #[test]
    fn unknown_color_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[colors]\nchill = \"plaid\"\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("plaid"));
    }

    #[test]
    fn oversized_id_width_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nid_width = 1000000000000\n").unwrap();
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, TodoError::ConfigError(_)));
        assert!(err.to_string().contains("id_width"));
    }

    #[test]
    fn max_id_width_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, format!("[display]\nid_width = {MAX_ID_WIDTH}\n")).unwrap();
        let cfg = Config::load(Some(&path), None).unwrap();
        assert_eq!(cfg.display.id_width, MAX_ID_WIDTH);
    }

    #[test]
    fn expand_absolute_path() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
    }
}
