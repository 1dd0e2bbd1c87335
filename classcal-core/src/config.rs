//! Global classcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalError, CalResult};

static DEFAULT_CALENDAR_DIR: &str = "~/calendar/school";

const ENV_PREFIX: &str = "CLASSCAL";

fn default_calendar_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CALENDAR_DIR)
}

fn is_default_calendar_dir(p: &PathBuf) -> bool {
    *p == default_calendar_dir()
}

/// Global configuration at ~/.config/classcal/config.toml
///
/// Any field can be overridden from the environment with a `CLASSCAL_`
/// prefix, e.g. `CLASSCAL_CALENDAR_DIR=/tmp/events`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClasscalConfig {
    /// Directory holding one .ics file per event
    #[serde(default = "default_calendar_dir", skip_serializing_if = "is_default_calendar_dir")]
    pub calendar_dir: PathBuf,

    /// Group assigned to new events when none is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_group: Option<String>,
}

impl Default for ClasscalConfig {
    fn default() -> Self {
        ClasscalConfig {
            calendar_dir: default_calendar_dir(),
            default_group: None,
        }
    }
}

impl ClasscalConfig {
    pub fn config_path() -> CalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalError::Config("Could not determine config directory".into()))?
            .join("classcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented default file on first use.
    pub fn load() -> CalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load config from a specific file plus `CLASSCAL_` environment overrides.
    pub fn load_from(path: &Path) -> CalResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: &Path, env: Environment) -> CalResult<Self> {
        debug!(path = %path.display(), "loading config");

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| CalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalError::Config(e.to_string()))
    }

    /// The calendar directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.calendar_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Save the config to `path`
    pub fn save(&self, path: &Path) -> CalResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| CalError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| CalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalResult<()> {
        let contents = format!(
            "\
# classcal configuration

# Where event files live:
# calendar_dir = \"{}\"

# Class or section assigned to new events:
# default_group = \"Grade 10-A\"
",
            DEFAULT_CALENDAR_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
