//! Configuration service for templink

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::config::{ProjectConfig, TemplinkConfig};

pub trait ConfigService: Send + Sync {
    fn load(&self, global_only: bool) -> Result<TemplinkConfig, ConfigError>;
    fn config_path(&self, global: bool) -> PathBuf;
    fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError>;
}

pub struct DefaultConfigService {
    root: PathBuf,
}

impl DefaultConfigService {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn global_config_path() -> PathBuf {
        // XDG standard: ~/.config/templink/config.toml
        std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("templink")
            .join("config.toml")
    }

    fn project_config_path(&self) -> PathBuf {
        self.root.join(".templink").join("config.toml")
    }

    fn load_from_path(path: &Path) -> Result<Option<TemplinkConfig>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))
    }

    fn write_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = TemplinkConfig::default();
        let content =
            toml::to_string_pretty(&config).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl ConfigService for DefaultConfigService {
    fn load(&self, global_only: bool) -> Result<TemplinkConfig, ConfigError> {
        let global = Self::load_from_path(&Self::global_config_path())?.unwrap_or_default();
        if global_only {
            return Ok(global);
        }

        let config = match Self::load_from_path(&self.project_config_path())? {
            Some(project) => merge_config(global, project),
            None => global,
        };
        apply_env_overrides(config)
    }

    fn config_path(&self, global: bool) -> PathBuf {
        if global {
            Self::global_config_path()
        } else {
            self.project_config_path()
        }
    }

    fn init(&self, global: bool, force: bool) -> Result<PathBuf, ConfigError> {
        let path = self.config_path(global);

        if path.exists() && !force {
            return Err(ConfigError::InvalidValue {
                key: "config".to_string(),
                message: format!(
                    "Config already exists: {}. Use --force to overwrite.",
                    path.display()
                ),
            });
        }

        Self::write_default_config(&path)?;
        Ok(path)
    }
}

/// Project settings win; the project name falls back to the global one
fn merge_config(base: TemplinkConfig, overlay: TemplinkConfig) -> TemplinkConfig {
    TemplinkConfig {
        project: ProjectConfig {
            name: overlay.project.name.or(base.project.name),
            ignored_paths: overlay.project.ignored_paths,
        },
        templates: overlay.templates,
        documents: overlay.documents,
    }
}

fn apply_env_overrides(config: TemplinkConfig) -> Result<TemplinkConfig, ConfigError> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

fn apply_overrides(
    mut config: TemplinkConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<TemplinkConfig, ConfigError> {
    if let Some(val) = var("TEMPLINK_MAX_FILE_SIZE_KB") {
        config.documents.max_file_size_kb =
            val.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "TEMPLINK_MAX_FILE_SIZE_KB".to_string(),
                message: format!("expected a number, got '{}'", val),
            })?;
    }
    if let Some(val) = var("TEMPLINK_TEMPLATE_EXTENSIONS") {
        let extensions: Vec<String> = val
            .split(',')
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        if extensions.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "TEMPLINK_TEMPLATE_EXTENSIONS".to_string(),
                message: "must list at least one extension".to_string(),
            });
        }
        config.templates.extensions = extensions;
    }
    Ok(config)
}
