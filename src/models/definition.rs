//! Definition result model
//!
//! The host-facing shape shared by both resolvers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::span::TextSpan;
use super::symbol::SymbolKind;

/// Host element classification attached to each definition record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "attribute")]
    Attribute,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "component")]
    Component,
    #[serde(rename = "directive")]
    Directive,
    #[serde(rename = "element")]
    Element,
    #[serde(rename = "entity")]
    Entity,
    #[serde(rename = "event")]
    Event,
    #[serde(rename = "key")]
    Key,
    #[serde(rename = "method")]
    Method,
    #[serde(rename = "module")]
    Module,
    #[serde(rename = "pipe")]
    Pipe,
    #[serde(rename = "property")]
    Property,
    #[serde(rename = "reference")]
    Reference,
    #[serde(rename = "template")]
    Template,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "variable")]
    Variable,
    /// A file referenced by a path literal
    #[serde(rename = "external module name")]
    ExternalModuleName,
    #[serde(rename = "")]
    Unknown,
}

impl ElementKind {
    /// Host tag string; `Unknown` is the empty tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attribute => "attribute",
            Self::Class => "class",
            Self::Component => "component",
            Self::Directive => "directive",
            Self::Element => "element",
            Self::Entity => "entity",
            Self::Event => "event",
            Self::Key => "key",
            Self::Method => "method",
            Self::Module => "module",
            Self::Pipe => "pipe",
            Self::Property => "property",
            Self::Reference => "reference",
            Self::Template => "template",
            Self::Type => "type",
            Self::Variable => "variable",
            Self::ExternalModuleName => "external module name",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SymbolKind> for ElementKind {
    fn from(kind: SymbolKind) -> Self {
        match kind {
            SymbolKind::Attribute => Self::Attribute,
            SymbolKind::Class => Self::Class,
            SymbolKind::Component => Self::Component,
            SymbolKind::Directive => Self::Directive,
            SymbolKind::Element => Self::Element,
            SymbolKind::Entity => Self::Entity,
            SymbolKind::Event => Self::Event,
            SymbolKind::Key => Self::Key,
            SymbolKind::Method => Self::Method,
            SymbolKind::Module => Self::Module,
            SymbolKind::Pipe => Self::Pipe,
            SymbolKind::Property => Self::Property,
            SymbolKind::Reference => Self::Reference,
            SymbolKind::Template => Self::Template,
            SymbolKind::Type => Self::Type,
            SymbolKind::Variable => Self::Variable,
            SymbolKind::Unknown => Self::Unknown,
        }
    }
}

/// One navigable definition site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionInfo {
    pub kind: ElementKind,
    pub name: String,
    pub container_kind: ElementKind,
    pub container_name: String,
    /// Range at the definition site, possibly in another file
    pub text_span: TextSpan,
    pub file_name: PathBuf,
}

/// Definitions plus the span bound to them in the queried document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionAndBoundSpan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<DefinitionInfo>>,
    pub text_span: TextSpan,
}

impl DefinitionAndBoundSpan {
    /// A bound span with nothing to navigate to
    pub fn bound_only(text_span: TextSpan) -> Self {
        Self {
            definitions: None,
            text_span,
        }
    }

    pub fn definitions(&self) -> &[DefinitionInfo] {
        self.definitions.as_deref().unwrap_or(&[])
    }

    pub fn is_navigable(&self) -> bool {
        !self.definitions().is_empty()
    }
}
