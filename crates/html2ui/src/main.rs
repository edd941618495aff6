//! html2ui CLI - convert HTML and Markdown documents into UI component trees.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use html2ui_core::Policy;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "html2ui")]
#[command(about = "Convert HTML and Markdown documents into UI component trees")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to html2ui.toml config file
    #[arg(short, long, default_value = "html2ui.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one document and print or write its component tree
    Convert {
        /// Input file, or "-" for stdin
        input: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Treat the input as Markdown (implied by a .md extension)
        #[arg(long)]
        markdown: bool,

        /// Return the top-level nodes without a root container
        #[arg(long)]
        no_root: bool,

        /// Policy for tags no module provides (warn, raise, ignore)
        #[arg(long)]
        on_missing_element: Option<Policy>,

        /// Policy for attributes a component rejects (warn, raise, ignore)
        #[arg(long)]
        on_missing_attribute: Option<Policy>,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert every page in a directory
    Build {
        /// Input directory (defaults to config or "pages")
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (defaults to config or "dist")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the components tags can resolve to
    Components,

    /// Write a default config and sample page
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Stdout carries converted JSON.
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            markdown,
            no_root,
            on_missing_element,
            on_missing_attribute,
            compact,
        } => {
            let overrides = config::ConvertOverrides {
                parent_container: no_root.then_some(false),
                on_missing_element,
                on_missing_attribute,
            };
            let options = commands::convert::ConvertOptions {
                input,
                output,
                markdown,
                compact,
            };
            commands::convert::run(&cli.config, overrides, options).await?;
        }
        Commands::Build { input, output } => {
            commands::build::run(&cli.config, input, output).await?;
        }
        Commands::Components => {
            commands::components::run(&cli.config).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
    }

    Ok(())
}
