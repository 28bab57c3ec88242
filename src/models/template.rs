//! Template source model

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::span::Span;

/// A location inside a template associated with a path literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSource {
    pub span: Span,
    /// Template file the span points into
    pub file_name: PathBuf,
}

impl TemplateSource {
    pub fn new(span: Span, file_name: impl Into<PathBuf>) -> Self {
        Self {
            span,
            file_name: file_name.into(),
        }
    }
}
