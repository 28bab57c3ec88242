//! Template file discovery with .gitignore integration
//!
//! Uses the `ignore` crate (from ripgrep) for gitignore-style pattern matching.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::overrides::{Override, OverrideBuilder};

use crate::models::config::TemplinkConfig;

/// Template filter configuration
#[derive(Debug, Clone)]
pub struct TemplateFilterConfig {
    /// Root directory for relative path resolution
    pub root: PathBuf,
    /// Template file extensions, without the leading dot
    pub extensions: Vec<String>,
    pub respect_gitignore: bool,
    /// Additional ignore patterns (gitignore syntax)
    pub ignore_patterns: Vec<String>,
    pub include_hidden: bool,
}

impl TemplateFilterConfig {
    pub fn from_config(root: &Path, config: &TemplinkConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            extensions: config
                .templates
                .extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
            respect_gitignore: config.templates.respect_gitignore,
            ignore_patterns: config.project.ignored_paths.clone(),
            include_hidden: config.templates.include_hidden,
        }
    }
}

/// Walks a project and yields template files
pub struct TemplateFilter {
    config: TemplateFilterConfig,
    templink_ignore: Option<Gitignore>,
    overrides: Option<Override>,
}

impl TemplateFilter {
    pub fn new(config: TemplateFilterConfig) -> Self {
        let templink_ignore = Self::load_templink_ignore(&config.root);
        let overrides = Self::build_overrides(&config);

        Self {
            config,
            templink_ignore,
            overrides,
        }
    }

    /// Load .templink/ignore file
    fn load_templink_ignore(root: &Path) -> Option<Gitignore> {
        let ignore_path = root.join(".templink").join("ignore");
        if !ignore_path.exists() {
            return None;
        }

        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(&ignore_path) {
            tracing::warn!("Failed to parse .templink/ignore: {}", err);
        }

        builder.build().ok()
    }

    fn build_overrides(config: &TemplateFilterConfig) -> Option<Override> {
        if config.ignore_patterns.is_empty() {
            return None;
        }

        let mut builder = OverrideBuilder::new(&config.root);

        // Override matches whitelist; a leading ! turns a pattern into an ignore
        for pattern in &config.ignore_patterns {
            let negated = format!("!{}", pattern);
            if let Err(e) = builder.add(&negated) {
                tracing::warn!("Invalid ignore pattern '{}': {}", pattern, e);
            }
        }

        builder.build().ok()
    }

    pub fn is_template(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.config.extensions.iter().any(|t| *t == ext)
            })
    }

    /// Check if a path should be ignored
    pub fn is_ignored(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.config.root).unwrap_or(path);
        let is_dir = path.is_dir();

        if let Some(ref ignore) = self.templink_ignore {
            match ignore.matched(relative, is_dir) {
                ignore::Match::Ignore(_) => return true,
                ignore::Match::Whitelist(_) => return false,
                ignore::Match::None => {}
            }
        }

        if let Some(ref overrides) = self.overrides {
            for ancestor in relative.ancestors().filter(|a| !a.as_os_str().is_empty()) {
                if overrides.matched(ancestor, ancestor != relative || is_dir).is_ignore() {
                    return true;
                }
            }
        }

        false
    }

    fn walk_builder(&self) -> WalkBuilder {
        let mut builder = WalkBuilder::new(&self.config.root);

        builder
            .hidden(!self.config.include_hidden)
            .git_ignore(self.config.respect_gitignore)
            .git_global(self.config.respect_gitignore)
            .git_exclude(self.config.respect_gitignore)
            .require_git(false);

        builder
    }

    /// All template files under the root, sorted by path
    pub fn discover_templates(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .walk_builder()
            .build()
            .filter_map(|e| e.ok())
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && self.is_template(path) && !self.is_ignored(path))
            .collect();

        files.sort();
        tracing::debug!(
            "Discovered {} templates under {}",
            files.len(),
            self.config.root.display()
        );
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn filter(root: &Path) -> TemplateFilter {
        TemplateFilter::new(TemplateFilterConfig::from_config(
            root,
            &TemplinkConfig::default(),
        ))
    }

    #[test]
    fn test_discovers_templates_by_extension() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("src/app")).unwrap();
        fs::write(root.join("src/app/app.component.html"), "<h1></h1>").unwrap();
        fs::write(root.join("src/app/app.component.ts"), "export class A {}").unwrap();
        fs::write(root.join("index.HTML"), "<html></html>").unwrap();

        let files = filter(root).discover_templates();
        assert_eq!(
            files,
            vec![root.join("index.HTML"), root.join("src/app/app.component.html")]
        );
    }

    #[test]
    fn test_configured_paths_are_ignored() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir_all(root.join("node_modules/lib")).unwrap();
        fs::write(root.join("node_modules/lib/x.html"), "").unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("dist/index.html"), "").unwrap();
        fs::write(root.join("a.html"), "").unwrap();

        let files = filter(root).discover_templates();
        assert_eq!(files, vec![root.join("a.html")]);
    }

    #[test]
    fn test_gitignore_integration() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::write(root.join(".gitignore"), "generated/\n").unwrap();
        fs::create_dir_all(root.join("generated")).unwrap();
        fs::write(root.join("generated/g.html"), "").unwrap();
        fs::write(root.join("kept.html"), "").unwrap();

        let files = filter(root).discover_templates();
        assert_eq!(files, vec![root.join("kept.html")]);
    }

    #[test]
    fn test_templink_ignore() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join(".templink")).unwrap();
        fs::write(root.join(".templink/ignore"), "*.spec.html\n").unwrap();
        fs::write(root.join("a.html"), "").unwrap();
        fs::write(root.join("a.spec.html"), "").unwrap();

        let filter = filter(root);
        assert!(filter.is_ignored(&root.join("a.spec.html")));
        assert!(!filter.is_ignored(&root.join("a.html")));
        assert_eq!(filter.discover_templates(), vec![root.join("a.html")]);
    }

    #[test]
    fn test_custom_extensions() {
        let temp = TempDir::new().unwrap();
        let mut config = TemplinkConfig::default();
        config.templates.extensions = vec![".svg".to_string()];

        let filter = TemplateFilter::new(TemplateFilterConfig::from_config(temp.path(), &config));
        assert!(filter.is_template(Path::new("logo.svg")));
        assert!(!filter.is_template(Path::new("index.html")));
    }
}
