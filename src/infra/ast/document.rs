//! Tree-sitter backed host documents

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use super::literal;
use super::node_types::{HostLanguage, NodeKinds};
use crate::config;
use crate::error::DocumentError;
use crate::infra::text;
use crate::models::{HostDocument, SyntaxNode};

/// A parsed TypeScript / JavaScript source file
pub struct SourceDocument {
    file_name: PathBuf,
    source: String,
    language: HostLanguage,
    tree: Tree,
}

impl SourceDocument {
    /// Parse `source`, picking the grammar from the file extension
    pub fn parse(
        file_name: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Result<Self, DocumentError> {
        let file_name = file_name.into();
        let language = HostLanguage::from_path(&file_name)
            .ok_or_else(|| DocumentError::UnsupportedLanguage(file_name.display().to_string()))?;
        Self::parse_as(file_name, source, language)
    }

    pub fn parse_as(
        file_name: impl Into<PathBuf>,
        source: impl Into<String>,
        language: HostLanguage,
    ) -> Result<Self, DocumentError> {
        let file_name = file_name.into();
        let source = source.into();

        let mut parser = Parser::new();
        parser
            .set_language(&language.grammar())
            .map_err(|_| DocumentError::Parse(file_name.clone()))?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| DocumentError::Parse(file_name.clone()))?;

        if tree.root_node().has_error() {
            tracing::debug!("{} parsed with errors", file_name.display());
        }

        Ok(Self {
            file_name,
            source,
            language,
            tree,
        })
    }

    /// Read and parse a file, refusing files above the configured size limit
    pub fn open(path: &Path) -> Result<Self, DocumentError> {
        let size = std::fs::metadata(path)?.len();
        let limit = config::max_file_size_bytes();
        if size > limit {
            return Err(DocumentError::FileTooLarge {
                path: path.display().to_string(),
                size_kb: size / 1024,
                limit_kb: limit / 1024,
            });
        }

        let source = std::fs::read_to_string(path)?;
        Self::parse(path, source)
    }

    pub fn language(&self) -> HostLanguage {
        self.language
    }

    /// Byte offset of a 1-indexed line/column
    pub fn offset_at(&self, line: u32, column: u32) -> Result<usize, DocumentError> {
        text::offset_at(&self.source, line, column).ok_or_else(|| {
            DocumentError::invalid_position(
                line,
                column,
                format!("outside {}", self.file_name.display()),
            )
        })
    }

    pub fn line_column_at(&self, offset: usize) -> Option<(u32, u32)> {
        text::line_column_at(&self.source, offset)
    }

    fn wrap<'a>(&'a self, node: Node<'a>) -> TsNode<'a> {
        TsNode {
            node,
            source: &self.source,
            kinds: self.language.node_kinds(),
        }
    }
}

impl HostDocument for SourceDocument {
    type Node<'a> = TsNode<'a>;

    fn file_name(&self) -> &Path {
        &self.file_name
    }

    fn find_tightest_node(&self, position: usize) -> Option<TsNode<'_>> {
        if position >= self.source.len() {
            return None;
        }

        let node = self
            .tree
            .root_node()
            .named_descendant_for_byte_range(position, position)?;

        // Fragments and escapes inside a literal belong to the literal itself
        let kinds = self.language.node_kinds();
        let node = match node.parent() {
            Some(parent) if kinds.is_string_like_kind(parent.kind()) => parent,
            _ => node,
        };

        Some(self.wrap(node))
    }
}

/// A tree-sitter node paired with its document source
#[derive(Clone, Copy)]
pub struct TsNode<'a> {
    node: Node<'a>,
    source: &'a str,
    kinds: &'static NodeKinds,
}

impl<'a> TsNode<'a> {
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    fn with(&self, node: Node<'a>) -> Self {
        Self {
            node,
            source: self.source,
            kinds: self.kinds,
        }
    }

    fn has_substitution(&self) -> bool {
        let mut cursor = self.node.walk();
        self.node
            .named_children(&mut cursor)
            .any(|child| child.kind() == self.kinds.template_substitution)
    }
}

impl std::fmt::Debug for TsNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TsNode")
            .field("kind", &self.node.kind())
            .field("start", &self.node.start_byte())
            .field("end", &self.node.end_byte())
            .finish()
    }
}

impl SyntaxNode for TsNode<'_> {
    fn parent(&self) -> Option<Self> {
        self.node.parent().map(|parent| self.with(parent))
    }

    fn is_string_literal_like(&self) -> bool {
        let kind = self.node.kind();
        kind == self.kinds.string || (kind == self.kinds.template_string && !self.has_substitution())
    }

    fn is_property_assignment(&self) -> bool {
        self.node.kind() == self.kinds.pair
    }

    fn property_name(&self) -> Option<Self> {
        if !self.is_property_assignment() {
            return None;
        }
        self.node
            .child_by_field_name(self.kinds.pair_key_field)
            .map(|key| self.with(key))
    }

    fn text(&self) -> &str {
        self.source
            .get(self.node.start_byte()..self.node.end_byte())
            .unwrap_or("")
    }

    fn literal_text(&self) -> Option<Cow<'_, str>> {
        if !self.is_string_literal_like() {
            return None;
        }
        let text = self.text();
        let Some(quote) = text.chars().next() else {
            return Some(Cow::Borrowed(""));
        };
        let inner = &text[quote.len_utf8()..];
        Some(literal::unescape(inner.strip_suffix(quote).unwrap_or(inner)))
    }

    fn start(&self) -> usize {
        self.node.start_byte()
    }

    fn width(&self) -> usize {
        self.node.end_byte() - self.node.start_byte()
    }
}
