//! Definition and bound-span resolution
//!
//! Two independent entry points produce the same [`DefinitionAndBoundSpan`]
//! shape:
//!
//! - [`template_definition_and_bound_span`]: a position inside an embedded
//!   template, resolved through a [`SymbolLocator`].
//! - [`file_reference_definition_and_bound_span`]: a position inside a host
//!   document that may sit in a quoted path literal naming an external
//!   template, resolved through a [`TemplateLookup`].
//!
//! Neither ever fails. `None` means nothing was located at the position; a
//! result without definitions means the span should be highlighted but there
//! is nowhere to navigate.
//!
//! [`DefinitionAndBoundSpan`]: crate::models::DefinitionAndBoundSpan

mod file_reference;
mod template;

pub use file_reference::{
    TEMPLATE_URL_PROPERTY, file_reference_definition_and_bound_span, resolve_literal_path,
};
pub use template::template_definition_and_bound_span;

use crate::models::{SymbolMatch, TemplateInfo, TemplateSource};

/// Resolves a template position to the symbol referenced there
pub trait SymbolLocator {
    fn locate_symbol(&self, info: &TemplateInfo) -> Option<SymbolMatch>;
}

impl<F> SymbolLocator for F
where
    F: Fn(&TemplateInfo) -> Option<SymbolMatch>,
{
    fn locate_symbol(&self, info: &TemplateInfo) -> Option<SymbolMatch> {
        self(info)
    }
}

/// Finds template sources associated with a path literal as written in source
pub trait TemplateLookup {
    fn templates_for_literal(&self, literal: &str) -> Vec<TemplateSource>;
}

impl<F> TemplateLookup for F
where
    F: Fn(&str) -> Vec<TemplateSource>,
{
    fn templates_for_literal(&self, literal: &str) -> Vec<TemplateSource> {
        self(literal)
    }
}
