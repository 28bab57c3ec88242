//! Symbol command implementation
//!
//! Resolve a position in a template to the definitions of the symbol there,
//! using a symbol index recorded by a template analyzer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::App;
use crate::cli::ParsedLocation;
use crate::cli::commands::position_in_file;
use crate::cli::response::DefinitionResponse;
use crate::infra::text;
use crate::models::TemplateInfo;
use crate::services::{SymbolIndex, template_definition_and_bound_span};

#[derive(Args, Debug)]
pub struct SymbolArgs {
    /// Template file with position (file:line[:column])
    pub location: String,

    /// Symbol index (JSON array of symbol matches)
    #[arg(short, long, env = "TEMPLINK_SYMBOL_INDEX")]
    pub index: PathBuf,
}

pub fn execute(args: SymbolArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let loc = ParsedLocation::parse_absolute(&args.location)?;

    let content = std::fs::read_to_string(&loc.file)
        .with_context(|| format!("Failed to read {}", loc.file.display()))?;
    let position = loc.offset_in(&content)?;
    let index = SymbolIndex::load(&args.index)?;

    let info = TemplateInfo::new(&loc.file, position);
    let response = match template_definition_and_bound_span(&index, &info) {
        Some(result) => {
            let bound = text::line_column_at(&content, result.text_span.start);
            DefinitionResponse::from_result(&result, bound, ctx, |def| {
                position_in_file(&def.file_name, def.text_span.start)
            })
        }
        None => DefinitionResponse::not_found(format!("No symbol at {}", loc)),
    };
    ctx.print_success_flat(response);

    Ok(())
}
