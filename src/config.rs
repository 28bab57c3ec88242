//! Global Configuration Singleton

use std::sync::OnceLock;

use crate::models::config::TemplinkConfig;

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub max_file_size_bytes: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from(&TemplinkConfig::default())
    }
}

impl From<&TemplinkConfig> for RuntimeConfig {
    fn from(config: &TemplinkConfig) -> Self {
        Self {
            max_file_size_bytes: config.documents.max_file_size_bytes(),
        }
    }
}

pub fn init(config: &TemplinkConfig) {
    let _ = CONFIG.set(RuntimeConfig::from(config));
}

pub fn max_file_size_bytes() -> u64 {
    config().max_file_size_bytes
}

fn config() -> RuntimeConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
