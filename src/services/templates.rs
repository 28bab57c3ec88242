//! Template registry
//!
//! Project-level record of external templates. Owns the policy deciding
//! which template sources a path literal refers to: the literal is resolved
//! against the referencing document's directory and matched against
//! registered template files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::infra::file_filter::{TemplateFilter, TemplateFilterConfig};
use crate::models::config::TemplinkConfig;
use crate::models::{Span, TemplateSource};
use crate::services::definition::{TemplateLookup, resolve_literal_path};

/// Registered template files and their lengths in bytes
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<PathBuf, usize>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover templates under `root` according to `config`
    pub fn discover(root: &Path, config: &TemplinkConfig) -> Self {
        let filter = TemplateFilter::new(TemplateFilterConfig::from_config(root, config));
        let mut registry = Self::new();

        for path in filter.discover_templates() {
            match std::fs::metadata(&path) {
                Ok(metadata) => registry.register(path, metadata.len() as usize),
                Err(e) => tracing::warn!("Skipping template {}: {}", path.display(), e),
            }
        }

        registry
    }

    pub fn register(&mut self, path: impl Into<PathBuf>, len: usize) {
        self.templates.insert(path.into(), len);
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Registered templates in path order
    pub fn templates(&self) -> impl Iterator<Item = (&Path, usize)> {
        self.templates.iter().map(|(p, len)| (p.as_path(), *len))
    }

    /// Sources for a template path, one spanning the whole file when registered
    pub fn sources_for_path(&self, path: &Path) -> Vec<TemplateSource> {
        self.templates
            .get(path)
            .map(|len| vec![TemplateSource::new(Span::new(0, *len), path)])
            .unwrap_or_default()
    }

    /// Lookup scoped to literals written in `document`
    pub fn for_document<'a>(&'a self, document: &'a Path) -> DocumentTemplates<'a> {
        DocumentTemplates {
            registry: self,
            document,
        }
    }
}

/// [`TemplateLookup`] resolving literals relative to one host document
#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplates<'a> {
    registry: &'a TemplateRegistry,
    document: &'a Path,
}

impl TemplateLookup for DocumentTemplates<'_> {
    fn templates_for_literal(&self, literal: &str) -> Vec<TemplateSource> {
        let target = resolve_literal_path(self.document, literal);
        let sources = self.registry.sources_for_path(&target);
        if sources.is_empty() {
            tracing::debug!("No registered template at {}", target.display());
        }
        sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::ast::SourceDocument;
    use crate::models::TextSpan;
    use crate::services::definition::file_reference_definition_and_bound_span;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lookup_resolves_relative_to_document() {
        let mut registry = TemplateRegistry::new();
        registry.register("/proj/src/app/x.html", 42);

        let lookup = registry.for_document(Path::new("/proj/src/app/a.ts"));
        let sources = lookup.templates_for_literal("./x.html");
        assert_eq!(
            sources,
            vec![TemplateSource::new(Span::new(0, 42), "/proj/src/app/x.html")]
        );

        assert!(lookup.templates_for_literal("../x.html").is_empty());
    }

    #[test]
    fn test_lookup_from_other_directory() {
        let mut registry = TemplateRegistry::new();
        registry.register("/proj/src/shared/card.html", 10);

        let lookup = registry.for_document(Path::new("/proj/src/app/a.ts"));
        assert_eq!(lookup.templates_for_literal("../shared/card.html").len(), 1);
    }

    #[test]
    fn test_discover_registers_lengths() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(root.join("x.html"), "<p>hello</p>").unwrap();
        fs::write(root.join("a.ts"), "").unwrap();

        let registry = TemplateRegistry::discover(root, &TemplinkConfig::default());
        assert_eq!(registry.len(), 1);

        let (path, len) = registry.templates().next().unwrap();
        assert_eq!(path, root.join("x.html"));
        assert_eq!(len, "<p>hello</p>".len());
    }

    #[test]
    fn test_registry_drives_file_reference_resolution() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        let source = "const meta = { styleUrl: './x.html' };\n";
        fs::write(root.join("a.ts"), source).unwrap();
        fs::write(root.join("x.html"), "<p></p>").unwrap();

        let registry = TemplateRegistry::discover(root, &TemplinkConfig::default());
        let document_path = root.join("a.ts");
        let doc = SourceDocument::open(&document_path).unwrap();
        let lookup = registry.for_document(&document_path);

        let literal_start = source.find("'./x.html'").unwrap();
        let result =
            file_reference_definition_and_bound_span(&doc, literal_start + 1, &lookup).unwrap();

        assert_eq!(result.text_span, TextSpan::new(literal_start, 10));
        let record = &result.definitions()[0];
        assert_eq!(record.file_name, root.join("x.html"));
        assert_eq!(record.text_span, TextSpan::new(0, "<p></p>".len()));
    }
}
