//! Data models for templink

pub mod config;
pub mod definition;
pub mod span;
pub mod symbol;
pub mod syntax;
pub mod template;

pub use config::TemplinkConfig;
pub use definition::{DefinitionAndBoundSpan, DefinitionInfo, ElementKind};
pub use span::{Span, TextSpan, to_text_span};
pub use symbol::{Container, DefinitionLocation, Symbol, SymbolKind, SymbolMatch, TemplateInfo};
pub use syntax::{HostDocument, SyntaxNode};
pub use template::TemplateSource;
