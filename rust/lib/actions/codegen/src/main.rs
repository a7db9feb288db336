//! `actions-codegen`: generate action handlers from a GraphQL schema.
//!
//! Every field of the root type (default `Mutation`) is an action. For each
//! action and target language one `<Action>Handler.<ext>` file is written.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use config::CodegenConfig;

#[derive(Parser, Debug)]
#[command(name = "actions-codegen")]
#[command(about = "Generate action handler code from a GraphQL schema")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write handler files for the selected actions and targets.
    Generate {
        /// Input .graphql schema file.
        #[arg(short, long)]
        schema: PathBuf,

        /// Config file (default: ./actions-codegen.toml).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory.
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Root type whose fields are the actions.
        #[arg(long)]
        root: Option<String>,

        /// Target language (typescript, go, kotlin). Repeatable.
        #[arg(short, long = "target")]
        targets: Vec<String>,

        /// Action to generate. Repeatable; default is every action.
        #[arg(short, long = "action")]
        actions: Vec<String>,
    },

    /// Print the enriched type map as JSON.
    Inspect {
        /// Input .graphql schema file.
        #[arg(short, long)]
        schema: PathBuf,

        /// Root type whose fields are the actions.
        #[arg(long)]
        root: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            config,
            out,
            root,
            targets,
            actions,
        } => {
            let config_path = config.unwrap_or_else(CodegenConfig::default_path);
            let config =
                CodegenConfig::load(&config_path)?.merge_args(root, out, targets, actions);

            info!("Reading schema: {}", schema.display());
            let written = commands::generate::run(&schema, &config)?;
            info!("Done: {} file(s) in {}", written.len(), config.out_dir.display());
        }
        Commands::Inspect { schema, root } => {
            let json = commands::inspect::run(&schema, root.as_deref())?;
            println!("{}", json);
        }
    }

    Ok(())
}
