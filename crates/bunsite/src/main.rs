//! bunsite CLI - documentation site configuration.
//!
//! Provides commands for:
//! - `check`: Validate the configuration and cross-check sidebar links
//! - `export`: Write the configuration in the rendering framework's shape
//! - `sidebar`: Print the navigation tree
//! - `presets`: List built-in configurations

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ConfigArgs, ExportArgs, SidebarArgs};
use output::Output;

/// bunsite - documentation site configuration.
#[derive(Parser)]
#[command(name = "bunsite", version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Enable verbose output (show config discovery and scan logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and its sidebar links.
    Check(CheckArgs),
    /// Export the configuration for the rendering framework.
    Export(ExportArgs),
    /// Print the sidebar navigation tree.
    Sidebar(SidebarArgs),
    /// List built-in presets.
    Presets,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&cli.config),
        Commands::Export(args) => args.execute(&cli.config),
        Commands::Sidebar(args) => args.execute(&cli.config),
        Commands::Presets => commands::presets::execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// `--verbose` enables INFO level, otherwise `RUST_LOG` (ERROR when unset).
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunsite_config::Preset;

    #[test]
    fn test_log_filter_levels() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(log_filter(true).to_string(), "info");
        assert_eq!(log_filter(false).to_string(), "error");
    }

    #[test]
    fn test_parse_global_args_after_subcommand() {
        let cli = Cli::try_parse_from(["bunsite", "sidebar", "--preset", "bun-js", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.preset, Some(Preset::BunJs));
        assert!(matches!(cli.command, Commands::Sidebar(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["bunsite", "presets", "--preset", "bun-docs"]).is_err());
    }
}
