//! Service layer for templink

pub mod config;
pub mod definition;
pub mod locator;
pub mod templates;

pub use config::{ConfigService, DefaultConfigService};
pub use definition::{
    SymbolLocator, TemplateLookup, file_reference_definition_and_bound_span,
    template_definition_and_bound_span,
};
pub use locator::SymbolIndex;
pub use templates::{DocumentTemplates, TemplateRegistry};
