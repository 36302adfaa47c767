use crate::density::{load_density_table, load_internal_density_table, DensityError};
use crate::render::session::{RenderOptions, TemplateSession};
use crate::units::types::MeasuringSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Density(#[from] DensityError),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub density: DensityConfig,

    #[serde(default)]
    pub combine: CombineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    // Parsed on use so a typo is reported as an invalid argument
    #[serde(default = "default_measuring_system")]
    pub measuring_system: String,

    #[serde(default = "default_true")]
    pub smart_punctuation: bool,

    #[serde(default = "default_true")]
    pub strong_ingredients: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            measuring_system: default_measuring_system(),
            smart_punctuation: true,
            strong_ingredients: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DensityConfig {
    // Embedded table when absent
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            path: None,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CombineConfig {
    #[serde(default)]
    pub include_count: bool,
}

fn default_measuring_system() -> String {
    MeasuringSystem::Metric.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn measuring_system(&self) -> Result<MeasuringSystem, ConfigError> {
        self.render
            .measuring_system
            .parse()
            .map_err(|e| ConfigError::InvalidArgument(format!("render.measuring_system: {}", e)))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            smart_punctuation: self.render.smart_punctuation,
            strong_ingredients: self.render.strong_ingredients,
        }
    }

    /// Load the configured density table and build a session around it
    pub fn build_session(&self) -> Result<TemplateSession, ConfigError> {
        let session = if !self.density.enabled {
            TemplateSession::without_densities()
        } else {
            let table = match &self.density.path {
                Some(path) => {
                    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    load_density_table(&raw)?
                }
                None => load_internal_density_table()?,
            };
            TemplateSession::new(Arc::new(table))
        };
        Ok(session.with_options(self.render_options()))
    }
}
