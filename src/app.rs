//! Application container for templink

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use crate::cli::OutputContext;
use crate::config;
use crate::models::config::TemplinkConfig;
use crate::services::config::{ConfigService, DefaultConfigService};
use crate::services::templates::TemplateRegistry;

pub struct App {
    root: PathBuf,
    pub(crate) output: OutputContext,
    pub(crate) config_service: Arc<dyn ConfigService>,
    pub(crate) config: TemplinkConfig,
    registry: OnceLock<TemplateRegistry>,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let root = std::env::current_dir()?.canonicalize()?;
        Self::with_root(root)
    }

    pub fn with_root(root: PathBuf) -> anyhow::Result<Self> {
        tracing::debug!("Initializing templink at {:?}", root);

        let output = OutputContext::new(root.clone());
        let config_service = Arc::new(DefaultConfigService::new(&root));
        let config = match config_service.load(false) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default config: {}", e);
                TemplinkConfig::default()
            }
        };

        config::init(&config);

        Ok(Self {
            root,
            output,
            config_service,
            config,
            registry: OnceLock::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Template registry, discovered on first use
    pub fn registry(&self) -> &TemplateRegistry {
        self.registry.get_or_init(|| {
            let registry = TemplateRegistry::discover(&self.root, &self.config);
            tracing::debug!("Discovered {} templates", registry.len());
            registry
        })
    }
}
