//! Host syntax tree abstraction
//!
//! The file-reference resolver only needs kind tests, parent traversal and
//! start/width accessors. Concrete trees (see `infra::ast`) implement these
//! traits; tests use hand-built trees.

use std::borrow::Cow;
use std::path::Path;

/// A node in a host document's syntax tree
pub trait SyntaxNode: Sized {
    /// Enclosing node, `None` at the root
    fn parent(&self) -> Option<Self>;

    /// Quoted string literal without substitutions
    fn is_string_literal_like(&self) -> bool;

    /// `name: value` entry of an object literal
    fn is_property_assignment(&self) -> bool;

    /// Name node of a property assignment
    fn property_name(&self) -> Option<Self>;

    /// Source text of the node as written, quotes included
    fn text(&self) -> &str;

    /// Decoded string value of a literal, escapes resolved.
    ///
    /// `Some` whenever `is_string_literal_like` is true, `None` otherwise.
    fn literal_text(&self) -> Option<Cow<'_, str>>;

    /// Start offset of the node in the document
    fn start(&self) -> usize;

    /// Width of the node in the document
    fn width(&self) -> usize;
}

/// A parsed host document
pub trait HostDocument {
    type Node<'a>: SyntaxNode
    where
        Self: 'a;

    fn file_name(&self) -> &Path;

    /// Smallest node whose range contains `position`
    fn find_tightest_node(&self, position: usize) -> Option<Self::Node<'_>>;
}
