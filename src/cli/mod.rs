//! CLI module for templink
//!
//! Provides command-line interface using clap derive macros.

pub mod commands;
pub mod location;
pub mod output;
pub mod response;

pub use location::ParsedLocation;
pub use output::OutputContext;

use clap::{Parser, Subcommand};

use commands::{config::ConfigArgs, def::DefArgs, symbol::SymbolArgs, templates::TemplatesArgs};

const LONG_ABOUT: &str = r#"
templink - Go-to-definition bridge for component templates

Resolves template path literals in component files to the template files
they name, and symbols inside templates to their definitions.

EXAMPLES:
  templink def src/app/app.component.ts:5:16
  templink symbol src/app/app.component.html:3:10 --index symbols.json
  templink templates
  templink config show
"#;

/// templink - Go-to-definition bridge for component templates
#[derive(Parser, Debug)]
#[command(name = "templink")]
#[command(author, version, about, long_about = LONG_ABOUT)]
#[command(propagate_version = true)]
#[command(after_help = "Use 'templink <COMMAND> --help' for more information about a command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (show debug info)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a template path literal to its templates
    Def(DefArgs),

    /// Resolve a template symbol to its definitions
    Symbol(SymbolArgs),

    /// List discovered templates
    Templates(TemplatesArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_symbol_command() {
        let cli = Cli::try_parse_from([
            "templink",
            "symbol",
            "a.html:1:2",
            "--index",
            "symbols.json",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Symbol(args) => {
                assert_eq!(args.location, "a.html:1:2");
                assert_eq!(args.index, std::path::PathBuf::from("symbols.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
