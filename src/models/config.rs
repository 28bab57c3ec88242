//! Configuration model for templink

use serde::{Deserialize, Serialize};

/// templink configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplinkConfig {
    #[serde(default)]
    pub project: ProjectConfig,

    #[serde(default)]
    pub templates: TemplatesConfig,

    #[serde(default)]
    pub documents: DocumentsConfig,
}

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name
    pub name: Option<String>,

    /// Paths to ignore (gitignore syntax)
    #[serde(default = "default_ignored_paths")]
    pub ignored_paths: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            ignored_paths: default_ignored_paths(),
        }
    }
}

fn default_ignored_paths() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        ".git".to_string(),
        "dist".to_string(),
        "build".to_string(),
        "coverage".to_string(),
        ".angular".to_string(),
        ".templink".to_string(),
    ]
}

/// Template discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// File extensions treated as external templates
    #[serde(default = "defaults::extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "defaults::respect_gitignore")]
    pub respect_gitignore: bool,

    #[serde(default)]
    pub include_hidden: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            extensions: defaults::extensions(),
            respect_gitignore: defaults::respect_gitignore(),
            include_hidden: false,
        }
    }
}

/// Host document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Largest host document that will be parsed, 0 = unlimited
    #[serde(default = "defaults::max_file_size_kb")]
    pub max_file_size_kb: u64,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            max_file_size_kb: defaults::max_file_size_kb(),
        }
    }
}

impl DocumentsConfig {
    pub fn max_file_size_bytes(&self) -> u64 {
        if self.max_file_size_kb == 0 {
            u64::MAX
        } else {
            self.max_file_size_kb * 1024
        }
    }
}

mod defaults {
    pub fn extensions() -> Vec<String> {
        vec!["html".to_string()]
    }
    pub fn respect_gitignore() -> bool {
        true
    }
    pub fn max_file_size_kb() -> u64 {
        2048
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TemplinkConfig::default();
        assert_eq!(config.templates.extensions, vec!["html".to_string()]);
        assert!(config.templates.respect_gitignore);
        assert!(!config.templates.include_hidden);
        assert_eq!(config.documents.max_file_size_kb, 2048);
        assert_eq!(config.documents.max_file_size_bytes(), 2048 * 1024);
    }

    #[test]
    fn test_unlimited_file_size() {
        let documents = DocumentsConfig {
            max_file_size_kb: 0,
        };
        assert_eq!(documents.max_file_size_bytes(), u64::MAX);
    }

    #[test]
    fn test_ignored_paths() {
        let config = TemplinkConfig::default();
        assert!(
            config
                .project
                .ignored_paths
                .contains(&"node_modules".to_string())
        );
        assert!(
            config
                .project
                .ignored_paths
                .contains(&".templink".to_string())
        );
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TemplinkConfig = toml::from_str(
            r#"
            [templates]
            extensions = ["html", "svg"]
            "#,
        )
        .unwrap();
        assert_eq!(config.templates.extensions.len(), 2);
        assert!(config.templates.respect_gitignore);
        assert_eq!(config.documents.max_file_size_kb, 2048);
    }
}
