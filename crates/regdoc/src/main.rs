//! regdoc CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "regdoc")]
#[command(version)]
#[command(about = "Render registry data documents by following a layout file", long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render data documents against a layout file
    Render {
        /// Layout file (delimited rule rows)
        #[arg(short, long)]
        schema: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Element path rendered as the document root (default: document root)
        #[arg(long)]
        start: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write output to FILE instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Data documents to render
        #[arg(required = true)]
        data: Vec<PathBuf>,
    },

    /// Print the outline of a layout file as JSON
    Schema {
        /// Layout file (delimited rule rows)
        #[arg(short, long)]
        schema: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the element tree of a data document
    Inspect {
        /// Data document
        data: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "regdoc=debug" } else { "regdoc=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Render {
            schema,
            config,
            start,
            format,
            output,
            data,
        } => commands::render::execute(commands::render::RenderArgs {
            schema,
            config,
            start,
            format,
            output,
            data,
        }),
        Commands::Schema { schema, config } => {
            commands::schema::execute(commands::schema::SchemaArgs { schema, config })
        }
        Commands::Inspect { data } => {
            commands::inspect::execute(commands::inspect::InspectArgs { data })
        }
    }
}
