//! Def command implementation
//!
//! Resolve a template path literal in a component file to the templates it
//! names.

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::ParsedLocation;
use crate::cli::commands::position_in_file;
use crate::cli::response::DefinitionResponse;
use crate::infra::ast::SourceDocument;
use crate::models::HostDocument;
use crate::services::file_reference_definition_and_bound_span;

#[derive(Args, Debug)]
pub struct DefArgs {
    /// Component file with position (file:line[:column])
    pub location: String,
}

pub fn execute(args: DefArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let loc = ParsedLocation::parse_absolute(&args.location)?;

    let document = SourceDocument::open(&loc.file)?;
    let position = document.offset_at(loc.line, loc.column)?;
    let lookup = app.registry().for_document(document.file_name());

    let response = match file_reference_definition_and_bound_span(&document, position, &lookup) {
        Some(result) => {
            let bound = document.line_column_at(result.text_span.start);
            DefinitionResponse::from_result(&result, bound, ctx, |def| {
                position_in_file(&def.file_name, def.text_span.start)
            })
        }
        None => DefinitionResponse::not_found(format!("No template reference at {}", loc)),
    };
    ctx.print_success_flat(response);

    Ok(())
}
