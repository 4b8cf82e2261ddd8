use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::options::CHECK_DATA;

pub const CONFIG_ENV: &str = "CSVSHEET_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Admission limits, validation target and notification pacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub allowed_extensions: Vec<String>,
    pub size_ceiling: u64,
    pub validation_target: String,
    pub show_divisor: f64,
    pub hide_divisor: f64,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: vec!["csv".to_string()],
            size_ceiling: 100_000,
            validation_target: CHECK_DATA.to_string(),
            show_divisor: 2000.0,
            hide_divisor: 0.3,
        }
    }
}

impl IngestConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.normalized()
    }

    /// Loads from `$CSVSHEET_CONFIG` when set, defaults otherwise.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        self.allowed_extensions = self
            .allowed_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        if self.size_ceiling == 0 {
            return Err(ConfigError::Invalid {
                field: "size_ceiling",
                reason: "must be greater than zero".to_string(),
            });
        }
        check_divisor("show_divisor", self.show_divisor)?;
        check_divisor("hide_divisor", self.hide_divisor)?;
        Ok(self)
    }
}

fn check_divisor(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}
