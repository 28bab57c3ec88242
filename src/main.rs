//! templink - Go-to-definition bridge for component templates

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use templink::app::App;
use templink::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Quiet by default; RUST_LOG overrides, --verbose raises to debug
    let default_filter = if cli.verbose {
        "templink=debug"
    } else {
        "templink=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();

    if let Err(e) = run(cli) {
        // Errors are JSON too, so callers parse a single format
        let response = serde_json::json!({
            "success": false,
            "error": format!("{:#}", e)
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&response)
                .unwrap_or_else(|_| format!(r#"{{"success":false,"error":"{}"}}"#, e))
        );
        std::process::exit(2);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    use templink::cli::commands;

    let app = App::new().map_err(|e| anyhow::anyhow!("Failed to initialize: {}", e))?;

    match cli.command {
        Commands::Def(args) => commands::def::execute(args, &app),
        Commands::Symbol(args) => commands::symbol::execute(args, &app),
        Commands::Templates(args) => commands::templates::execute(args, &app),
        Commands::Config(args) => commands::config::execute(args, &app),
    }
}
