//! Symbol index
//!
//! A replayable [`SymbolLocator`] over symbol matches recorded by an external
//! template analyzer, stored as a JSON array of `SymbolMatch` objects.

use std::path::{Path, PathBuf};

use crate::error::IndexError;
use crate::models::{SymbolMatch, TemplateInfo};
use crate::services::definition::SymbolLocator;

#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    /// Template file the matches belong to, `None` matches any file
    file_name: Option<PathBuf>,
    matches: Vec<SymbolMatch>,
}

impl SymbolIndex {
    pub fn new(matches: Vec<SymbolMatch>) -> Self {
        Self {
            file_name: None,
            matches,
        }
    }

    /// Restrict the index to queries against one template file
    pub fn for_file(mut self, file_name: impl Into<PathBuf>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let matches: Vec<SymbolMatch> = serde_json::from_str(json)?;
        Ok(Self::new(matches))
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        if !path.exists() {
            return Err(IndexError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let index = Self::from_json(&content)?;
        tracing::debug!(
            "Loaded {} symbol matches from {}",
            index.len(),
            path.display()
        );
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl SymbolLocator for SymbolIndex {
    fn locate_symbol(&self, info: &TemplateInfo) -> Option<SymbolMatch> {
        if let Some(file_name) = &self.file_name
            && *file_name != info.file_name
        {
            return None;
        }

        self.matches
            .iter()
            .find(|m| m.span.contains(info.position))
            .cloned()
    }
}
