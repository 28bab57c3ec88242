//! Symbol model definitions
//!
//! Template symbols as reported by a symbol locator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::span::Span;

/// A semantic entity referenced from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<Container>,
    /// Sites where the symbol is defined, in locator order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<Vec<DefinitionLocation>>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            container: None,
            definition: None,
        }
    }

    pub fn with_container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    pub fn with_definition(mut self, definition: Vec<DefinitionLocation>) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Definition sites, treating an absent list as empty
    pub fn definition_sites(&self) -> &[DefinitionLocation] {
        self.definition.as_deref().unwrap_or(&[])
    }

    pub fn has_definition(&self) -> bool {
        !self.definition_sites().is_empty()
    }
}

/// Enclosing symbol used for display grouping (e.g. the component class)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub kind: SymbolKind,
}

impl Container {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A file + span where a symbol is defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionLocation {
    pub span: Span,
    pub file_name: PathBuf,
}

impl DefinitionLocation {
    pub fn new(span: Span, file_name: impl Into<PathBuf>) -> Self {
        Self {
            span,
            file_name: file_name.into(),
        }
    }
}

/// Result of locating a symbol at a position.
///
/// `span` is the range in the queried document to highlight, not the
/// definition's own span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: Symbol,
    pub span: Span,
}

impl SymbolMatch {
    pub fn new(symbol: Symbol, span: Span) -> Self {
        Self { symbol, span }
    }
}

/// Position inside a template handed to a symbol locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub file_name: PathBuf,
    pub position: usize,
}

impl TemplateInfo {
    pub fn new(file_name: impl Into<PathBuf>, position: usize) -> Self {
        Self {
            file_name: file_name.into(),
            position,
        }
    }
}

/// Template symbol classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Attribute,
    Class,
    Component,
    Directive,
    Element,
    Entity,
    Event,
    Key,
    Method,
    Module,
    Pipe,
    Property,
    Reference,
    Template,
    Type,
    Variable,
    Unknown,
}

impl SymbolKind {
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
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attribute" => Ok(Self::Attribute),
            "class" => Ok(Self::Class),
            "component" => Ok(Self::Component),
            "directive" => Ok(Self::Directive),
            "element" => Ok(Self::Element),
            "entity" => Ok(Self::Entity),
            "event" => Ok(Self::Event),
            "key" => Ok(Self::Key),
            "method" => Ok(Self::Method),
            "module" => Ok(Self::Module),
            "pipe" => Ok(Self::Pipe),
            "property" => Ok(Self::Property),
            "reference" => Ok(Self::Reference),
            "template" => Ok(Self::Template),
            "type" => Ok(Self::Type),
            "variable" => Ok(Self::Variable),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Unknown symbol kind: {}", s)),
        }
    }
}
