//! Templates command implementation

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::response::{TemplateOutput, TemplatesResponse};

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Maximum number of templates to list
    #[arg(short, long)]
    pub limit: Option<usize>,
}

pub fn execute(args: TemplatesArgs, app: &App) -> Result<()> {
    let ctx = &app.output;
    let registry = app.registry();

    let templates: Vec<TemplateOutput> = registry
        .templates()
        .take(args.limit.unwrap_or(usize::MAX))
        .map(|(path, length)| TemplateOutput {
            file: ctx.relative_path(path),
            length,
        })
        .collect();

    ctx.print_success_flat(TemplatesResponse {
        count: registry.len(),
        templates,
    });

    Ok(())
}
