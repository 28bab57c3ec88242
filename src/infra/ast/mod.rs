//! AST infrastructure for templink
//!
//! Tree-sitter parsing of TypeScript / JavaScript host documents behind the
//! `HostDocument` / `SyntaxNode` traits.

pub mod document;
pub mod literal;
pub mod node_types;

pub use document::{SourceDocument, TsNode};
pub use node_types::{HostLanguage, NodeKinds};
