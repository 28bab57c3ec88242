//! File-reference definitions
//!
//! A quoted path literal used as a property value (`styleUrl: './x.html'`)
//! resolves to the templates registered for that literal.

use std::path::{Component, Path, PathBuf};

use crate::models::{
    DefinitionAndBoundSpan, DefinitionInfo, ElementKind, HostDocument, SyntaxNode, TextSpan,
    to_text_span,
};

use super::TemplateLookup;

/// Property whose literal is never treated as a file reference here.
/// Compared against the property name's source text as written.
pub const TEMPLATE_URL_PROPERTY: &str = "templateUrl";

/// Resolve a path literal at `position` in a host document.
pub fn file_reference_definition_and_bound_span<D, T>(
    document: &D,
    position: usize,
    lookup: &T,
) -> Option<DefinitionAndBoundSpan>
where
    D: HostDocument + ?Sized,
    T: TemplateLookup + ?Sized,
{
    let Some(node) = document.find_tightest_node(position) else {
        tracing::debug!(
            "No node at {}:{}",
            document.file_name().display(),
            position
        );
        return None;
    };

    if !node.is_string_literal_like() {
        return None;
    }

    let parent = node.parent()?;
    if !parent.is_property_assignment() {
        return None;
    }
    let property = parent.property_name()?;
    if property.text() == TEMPLATE_URL_PROPERTY {
        tracing::debug!("Skipping {} literal", TEMPLATE_URL_PROPERTY);
        return None;
    }

    let Some(literal) = node.literal_text() else {
        tracing::debug!("String literal at {} has no value", node.start());
        return None;
    };
    let target = resolve_literal_path(document.file_name(), &literal);
    let sources = lookup.templates_for_literal(&literal);

    tracing::debug!(
        "Literal '{}' -> {} ({} template sources)",
        literal,
        target.display(),
        sources.len()
    );

    let definitions = sources
        .iter()
        .map(|source| DefinitionInfo {
            kind: ElementKind::ExternalModuleName,
            name: literal.to_string(),
            container_kind: ElementKind::Unknown,
            container_name: String::new(),
            text_span: to_text_span(source.span),
            file_name: target.clone(),
        })
        .collect();

    Some(DefinitionAndBoundSpan {
        definitions: Some(definitions),
        text_span: TextSpan::new(node.start(), node.width()),
    })
}

/// Join a path literal onto the directory containing `document`.
///
/// Purely lexical: `.` and `..` are folded, a leading `/` in the literal is
/// treated as a plain separator, and the filesystem is never consulted.
pub fn resolve_literal_path(document: &Path, literal: &str) -> PathBuf {
    let dir = document
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let tail = Path::new(literal)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));

    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in dir.components().chain(tail) {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
