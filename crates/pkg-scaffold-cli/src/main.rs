//! pkg-scaffold CLI — regenerates the scaffolding of a TypeScript/webpack package.
//!
//! Provides three commands:
//! `generate` (manifest + bundle description → `.template/` → project root),
//! `check` (load and validate only), and `init` (write a starter `template.json`).
//!
//! Generation is delegated to a [`pkg_scaffold_core::generator::Generator`].

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pkg-scaffold",
    about = "Scaffolding generator for TypeScript/webpack library packages",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the scaffolding and copy it into the project
    Generate {
        /// Project directory containing package.json
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Path to the bundle description (default: <DIR>/template.json)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Only write .template/, do not copy files into the project
        #[arg(long)]
        no_copy: bool,
    },

    /// Load and validate the configuration without writing anything
    Check {
        /// Project directory containing package.json
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Path to the bundle description (default: <DIR>/template.json)
        #[arg(long)]
        template: Option<PathBuf>,

        /// Print the resolved configuration as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a starter template.json
    Init {
        /// Project directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            dir,
            template,
            no_copy,
        } => {
            commands::generate::run(&dir, template.as_deref(), no_copy).await?;
        }
        Commands::Check {
            dir,
            template,
            json,
        } => {
            commands::check::run(&dir, template.as_deref(), json).await?;
        }
        Commands::Init { dir } => {
            commands::init::run(&dir).await?;
        }
    }

    Ok(())
}
